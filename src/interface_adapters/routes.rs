use crate::interface_adapters::http::{not_found_handler, snapshot_handler};
use crate::interface_adapters::net::ws_handler;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/snapshot", get(snapshot_handler))
        .fallback(not_found_handler)
        .with_state(state)
}
