pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::plans::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(handlers::handle_catalog))
        .route("/api/v1/plans", post(handlers::handle_generate_plan))
        .route("/api/v1/plans/svg", post(handlers::handle_download_svg))
        .with_state(state)
}
