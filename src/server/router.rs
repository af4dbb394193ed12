use axum::Router;
use axum::routing::{get, post};

use crate::features::health::handle_health;
use crate::features::ops::handle_ops;
use crate::server::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/bfhl", post(handle_ops))
        .with_state(state)
}
