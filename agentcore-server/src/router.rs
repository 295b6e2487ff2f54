// ABOUTME: HTTP router construction.
// ABOUTME: Assembles the routes and request tracing into a single Router.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/run", post(api::run_task))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
