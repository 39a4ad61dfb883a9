use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(super::handlers::root))
        .route("/health", get(super::handlers::health_check))
        .route("/chat", post(super::handlers::chat))
        .with_state(state)
}
