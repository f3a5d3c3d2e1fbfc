// Network adapter modules for presentation-layer sockets.

pub mod client;

pub use client::{spawn_world_serializer, ws_handler};
