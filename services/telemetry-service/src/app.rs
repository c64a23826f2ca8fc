use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{healthz, log_event, readyz};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/v1/log", get(log_event).post(log_event))
        .route("/exec", get(log_event).post(log_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
