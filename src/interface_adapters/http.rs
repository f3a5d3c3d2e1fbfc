// HTTP handlers and shared response types for consistent API error payloads.

use crate::interface_adapters::protocol::WorldUpdateDto;
use crate::interface_adapters::state::AppState;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    // Human-readable error string for consistent JSON error responses.
    pub error: String,
}

/// Returns the most recent world snapshot for polling renderers.
pub async fn snapshot_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    // Convert while borrowed; the watch guard must not be held longer than needed.
    let dto = WorldUpdateDto::from(&*state.session.world_latest_tx.borrow());
    Json(dto)
}

pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
}
