// Wire protocol DTOs and conversions for the arcade session.

use crate::domain::{FieldSnapshot, GunSnapshot, ProjectileSnapshot, Viewport};
use crate::use_cases::{GameEvent, WorldUpdate};
use serde::{Deserialize, Serialize};

/// Messages the server sends to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Snapshot of the world for a given tick.
    WorldUpdate(WorldUpdateDto),
}

/// Messages the presentation layer sends over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // Viewport size at first layout.
    Measure(ViewportDto),
    // Drag gesture started; carries the viewport for lazy measurement.
    DragStart(ViewportDto),
    Drag(DragDto),
    Fire,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewportDto {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DragDto {
    #[serde(default)]
    pub dx: f32,
    #[serde(default)]
    pub dy: f32,
}

impl From<ViewportDto> for Viewport {
    fn from(v: ViewportDto) -> Self {
        Self {
            width: v.width,
            height: v.height,
        }
    }
}

impl From<ClientMessage> for GameEvent {
    fn from(msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::Measure(v) => GameEvent::Measure { viewport: v.into() },
            ClientMessage::DragStart(v) => GameEvent::DragStart { viewport: v.into() },
            ClientMessage::Drag(d) => GameEvent::Drag { dx: d.dx, dy: d.dy },
            ClientMessage::Fire => GameEvent::Fire,
        }
    }
}

/// Snapshot of the world sent to clients on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub field: Option<FieldStateDto>,
    pub gun: GunStateDto,
    pub projectiles: Vec<ProjectileStateDto>,
}

impl From<&WorldUpdate> for WorldUpdateDto {
    fn from(update: &WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            field: update.field.as_ref().map(FieldStateDto::from),
            gun: GunStateDto::from(&update.gun),
            projectiles: update
                .projectiles
                .iter()
                .map(ProjectileStateDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldStateDto {
    pub width: f32,
    pub height: f32,
    pub gun_min_y: f32,
    pub gun_max_y: f32,
    pub lane_top_y: f32,
    pub lane_bottom_y: f32,
}

impl From<&FieldSnapshot> for FieldStateDto {
    fn from(field: &FieldSnapshot) -> Self {
        Self {
            width: field.width,
            height: field.height,
            gun_min_y: field.gun_min_y,
            gun_max_y: field.gun_max_y,
            lane_top_y: field.lane_top_y,
            lane_bottom_y: field.lane_bottom_y,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GunStateDto {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&GunSnapshot> for GunStateDto {
    fn from(gun: &GunSnapshot) -> Self {
        Self {
            x: gun.x,
            y: gun.y,
            width: gun.width,
            height: gun.height,
        }
    }
}

/// Flattened projectile state; ids go out as strings like every other wire id.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectileStateDto {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&ProjectileSnapshot> for ProjectileStateDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            id: projectile.id.to_string(),
            x: projectile.x,
            y: projectile.y,
            width: projectile.width,
            height: projectile.height,
        }
    }
}
