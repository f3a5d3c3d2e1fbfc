// Use cases layer: application workflows for the arcade session.

pub mod game;
pub mod session;
pub mod types;

pub use game::{SessionChannels, SessionSettings, spawn_session};
pub use session::GameSession;
pub use types::{GameEvent, WorldUpdate};
