use super::session::GameSession;
use super::types::{GameEvent, WorldUpdate};
use crate::domain::Tuning;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{debug, info};

/// Shared configuration for spawning a session world.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Capacity for inbound input events.
    pub input_channel_capacity: usize,
    /// Capacity for broadcast world updates.
    pub world_broadcast_capacity: usize,
    /// Fixed tick interval for the game loop.
    pub tick_interval: Duration,
    /// Gameplay sizes in pixels.
    pub tuning: Tuning,
}

/// Channels into and out of a running session world task.
#[derive(Clone)]
pub struct SessionChannels {
    /// Sender for input events into the world task.
    pub input_tx: mpsc::Sender<GameEvent>,
    /// Broadcast sender for per-tick world updates.
    pub world_tx: broadcast::Sender<WorldUpdate>,
    /// Latest world update, for polling and lag recovery.
    pub world_latest_tx: watch::Sender<WorldUpdate>,
    /// Stops the world task when notified.
    pub shutdown: Arc<Notify>,
}

/// Creates the session channels and spawns its world task.
pub fn spawn_session(settings: &SessionSettings) -> SessionChannels {
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(settings.input_channel_capacity);
    let (world_tx, _world_rx) =
        broadcast::channel::<WorldUpdate>(settings.world_broadcast_capacity);

    let session = GameSession::new(settings.tuning);
    let (world_latest_tx, _world_latest_rx) = watch::channel(session.snapshot());
    let shutdown = Arc::new(Notify::new());

    tokio::spawn(world_task(
        session,
        input_rx,
        world_tx.clone(),
        world_latest_tx.clone(),
        settings.tick_interval,
        shutdown.clone(),
    ));

    SessionChannels {
        input_tx,
        world_tx,
        world_latest_tx,
        shutdown,
    }
}

/// Fixed-step loop that owns the session; input is applied between ticks, never during one.
pub async fn world_task(
    mut session: GameSession,
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    world_latest_tx: watch::Sender<WorldUpdate>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) {
    let mut interval = tokio::time::interval(tick_interval);
    info!(tick_ms = tick_interval.as_millis(), "world task started");

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        // Process all pending inputs/events.
        let mut inputs_closed = false;
        loop {
            match input_rx.try_recv() {
                Ok(ev) => session.apply(ev),
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    inputs_closed = true;
                    break;
                }
            }
        }
        if inputs_closed {
            debug!("input channel closed");
            break;
        }

        session.tick();

        let update = session.snapshot();
        // No subscribers is fine; the watch still holds the latest update.
        let _ = world_tx.send(update.clone());
        world_latest_tx.send_replace(update);
    }

    info!(tick = session.tick_count(), "world task stopped");
}
