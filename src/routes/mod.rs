// src/routes/mod.rs
pub mod webhook;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use webhook::webhook_handler;

/// No request timeout wraps the webhook: dropping the handler would cancel the
/// outbound lookup and reply mid-flight.
pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", post(webhook_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
}
