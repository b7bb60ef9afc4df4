// Presentation layer - HTTP routes over the simulation engine
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_terminal, health_check, set_input, start_engine, stop_engine, stream_terminal,
    submit_command,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/terminal", get(get_terminal))
        .route("/terminal/stream", get(stream_terminal))
        .route("/terminal/commands", post(submit_command))
        .route("/terminal/input", put(set_input))
        .route("/terminal/start", post(start_engine))
        .route("/terminal/stop", post(stop_engine))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
