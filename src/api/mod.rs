//! Thin HTTP transport around the ranking core.

pub mod dto;
pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::Leaderboard;
use crate::middleware::request_logging;

pub type AppState = Arc<Leaderboard>;

/// Build the full axum router: the three leaderboard endpoints, a health
/// probe, CORS, tracing, request logging, and a connection-level timeout.
///
/// `request_timeout` bounds how long any single request may take before the
/// layer aborts it with a `408`; it never cancels an in-flight core call
/// (the core itself has no cancellation point), only the HTTP response.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/customer/:id/score/:delta", post(routes::update_score))
        .route("/leaderboard", get(routes::get_range))
        .route("/leaderboard/:id", get(routes::get_neighbors))
        .route("/health", get(routes::health))
        .layer(axum::middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
