pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::frontend;
use crate::interview::handlers;
use crate::state::AppState;

/// Programmatic JSON API.
pub fn build_api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route(
            "/generate-interview",
            post(handlers::handle_generate_interview),
        )
        .route("/candidates", get(handlers::handle_list_candidates))
        .with_state(state)
}

/// Interactive HTML form front end.
pub fn build_form_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(frontend::handle_form_page))
        .route("/submit", post(frontend::handle_form_submit))
        .route("/reset", post(frontend::handle_form_reset))
        .with_state(state)
}
