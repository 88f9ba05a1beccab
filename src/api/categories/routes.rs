use crate::api::categories::handlers::list_categories_handler;
use crate::api::models::AppState;
use crate::store::CategoryStore;
use axum::{Router, routing::get};

pub fn routes<S: CategoryStore>() -> Router<AppState<S>> {
    Router::new().route("/api/categories", get(list_categories_handler::<S>))
}
