// HTTP request handlers
use crate::application::engine::EngineError;
use crate::domain::console::LogEntry;
use crate::infrastructure::chunked_json::stream_events;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CommandInput {
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommandReply {
    pub hint: String,
    /// Console line added for the input; absent when the input was blank
    pub echo: Option<LogEntry>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current terminal state
pub async fn get_terminal(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let snapshot = state.engine.snapshot().await;

    match json_response(&snapshot, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Push feed of terminal events, starting with a snapshot
pub async fn stream_terminal(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let events = state.engine.events().await;
    stream_events(events, accepts_brotli(&headers))
}

pub async fn submit_command(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CommandInput>,
) -> Json<CommandReply> {
    let reply = match state.engine.submit_command(&body.input).await {
        Some(submission) => CommandReply {
            hint: submission.hint,
            echo: Some(submission.echo),
        },
        None => CommandReply {
            hint: state.engine.snapshot().await.command.hint,
            echo: None,
        },
    };
    Json(reply)
}

pub async fn set_input(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CommandInput>,
) -> StatusCode {
    state.engine.set_input(&body.input).await;
    StatusCode::NO_CONTENT
}

pub async fn start_engine(State(state): State<Arc<AppState>>) -> Response {
    lifecycle_response(state.engine.start().await)
}

pub async fn stop_engine(State(state): State<Arc<AppState>>) -> Response {
    lifecycle_response(state.engine.stop().await)
}

fn lifecycle_response(result: Result<(), EngineError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (StatusCode::CONFLICT, e.to_string()).into_response(),
    }
}
