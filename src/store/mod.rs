pub mod postgres;

pub use postgres::PgCategoryStore;

use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// An award category row as produced by the backend read surface.
///
/// `candidate_count` and the `top_candidate_*` pair are pre-aggregated
/// upstream (a database view joins candidates onto categories); this crate
/// never computes or mutates them. `top_candidate_votes` is null exactly
/// when `top_candidate_name` is null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub candidate_count: i64,
    pub top_candidate_name: Option<String>,
    pub top_candidate_votes: Option<i64>,
}

/// Errors from the category read surface
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read seam over the categories relation.
///
/// Handlers take the backend through this trait so they can be exercised
/// with an in-memory fake; production wiring injects [`PgCategoryStore`].
pub trait CategoryStore: Clone + Send + Sync + 'static {
    /// Fetch every category row, sorted ascending by name.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, StoreError>> + Send;
}
