use crate::use_cases::SessionChannels;
use axum::extract::ws::Utf8Bytes;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct AppState {
    // Input and snapshot channels of the running session world.
    pub session: SessionChannels,
    // Serialized world updates, shared across all connections.
    pub world_bytes_tx: broadcast::Sender<Utf8Bytes>,
}
