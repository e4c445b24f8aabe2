use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;
use crate::components::{SELECTOR_PATH, SUBMIT_PATH};

/// Create the report router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/report/:kind", get(handlers::report_for_kind))
        .route("/report/:kind/:id", get(handlers::report))
        .route(SELECTOR_PATH, get(handlers::selector))
        .route(SUBMIT_PATH, post(handlers::select))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
