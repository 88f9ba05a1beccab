pub mod categories;
pub mod models;

// Re-exports
pub use models::*;

use axum::Json;

// Health handler (simple, keep here)
pub async fn health_handler() -> Json<models::HealthResponse> {
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
