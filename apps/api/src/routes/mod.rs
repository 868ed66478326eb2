pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::latex::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // LaTeX generation
        .route("/api/v1/latex", post(handlers::handle_generate))
        .route(
            "/api/v1/latex/templates",
            get(handlers::handle_list_templates),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
