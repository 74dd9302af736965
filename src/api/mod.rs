use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

pub mod handlers;
pub mod responses;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::get_health))
        .route("/api/parking/zones", get(handlers::get_zones))
        .route("/api/parking/lots", get(handlers::get_lots))
        .route("/api/parking/guidance", post(handlers::post_guidance))
        .with_state(state)
}
