pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::initialization::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route(
            "/api/v1/documents/initialize",
            post(handlers::handle_initialize),
        )
        .route("/api/v1/documents/preview", post(handlers::handle_preview))
        .route(
            "/api/v1/documents/:document_type/:id",
            get(handlers::handle_get_document),
        )
        .with_state(state)
}
