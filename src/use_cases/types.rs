// Use-case level inputs/outputs for the game loop.

use crate::domain::{FieldSnapshot, GunSnapshot, ProjectileSnapshot, Viewport};

#[derive(Debug, Clone)]
pub enum GameEvent {
    /// First layout of the presentation surface.
    Measure { viewport: Viewport },
    /// Start of a drag gesture; measures the field if that has not happened yet.
    DragStart { viewport: Viewport },
    Drag { dx: f32, dy: f32 },
    Fire,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldUpdate {
    pub tick: u64,
    pub field: Option<FieldSnapshot>,
    pub gun: GunSnapshot,
    pub projectiles: Vec<ProjectileSnapshot>,
}
