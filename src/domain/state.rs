// Domain-level simulation entities and snapshot types.

use crate::domain::field::PlayField;

#[derive(Debug, Clone, PartialEq)]
pub struct GunSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSnapshot {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot {
    pub width: f32,
    pub height: f32,
    pub gun_min_y: f32,
    pub gun_max_y: f32,
    // Boundary lines drawn across the field.
    pub lane_top_y: f32,
    pub lane_bottom_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gun {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Gun {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    // Pixels travelled upward per tick.
    pub speed: f32,
}

impl Projectile {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// True once the projectile has scrolled entirely past the top edge.
    pub fn is_off_screen(&self) -> bool {
        self.y < -self.height
    }
}

impl From<&Gun> for GunSnapshot {
    fn from(g: &Gun) -> Self {
        Self {
            x: g.x,
            y: g.y,
            width: g.width,
            height: g.height,
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id,
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
        }
    }
}

impl From<&PlayField> for FieldSnapshot {
    fn from(f: &PlayField) -> Self {
        let lines = f.lane_lines();
        Self {
            width: f.width,
            height: f.height,
            gun_min_y: f.gun_min_y,
            gun_max_y: f.gun_max_y,
            lane_top_y: lines.top_y,
            lane_bottom_y: lines.bottom_y,
        }
    }
}
