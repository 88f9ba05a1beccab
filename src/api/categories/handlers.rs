use crate::api::models::*;
use crate::store::{Category, CategoryStore};
use axum::{Json, extract::State};
use tracing::info;

/// List all award categories, sorted ascending by name.
///
/// The full relation is returned in one response; filtering happens
/// client-side. Any store failure is logged and collapsed into a generic
/// 500 with no partial results.
pub async fn list_categories_handler<S: CategoryStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state
        .store
        .list_categories()
        .await
        .map_err(AppError::CategoryFetch)?;

    info!(count = categories.len(), "Categories listed");

    Ok(Json(categories))
}
