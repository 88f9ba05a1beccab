use super::{Category, CategoryStore, StoreError};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Postgres-backed category store.
///
/// Holds a connection pool; each request checks out a connection for the
/// duration of a single query and releases it back to the pool when the
/// query resolves. No state is held across requests.
#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    /// Connect a new pool against the given database URL.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!(max_connections, "Database pool connected");

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CategoryStore for PgCategoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query_as::<_, Category>(
            r#"SELECT id, name, description, candidate_count, top_candidate_name, top_candidate_votes
               FROM categories
               ORDER BY name"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
