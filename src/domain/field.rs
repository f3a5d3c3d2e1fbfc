// Play field measurement: field size, gun lane and spawn point.

use crate::domain::bounds::Bounds;
use crate::domain::tuning::Tuning;

/// Viewport size reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// A zero, negative or non-finite size cannot be measured.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Horizontal lines marking the gun lane, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneLines {
    pub top_y: f32,
    pub bottom_y: f32,
}

/// Field bounds derived once from the first viewport measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
    pub gun_width: f32,
    pub gun_height: f32,
    pub gun_min_y: f32,
    pub gun_max_y: f32,
}

impl PlayField {
    pub fn measure(viewport: Viewport, tuning: &Tuning) -> Self {
        let gun_max_y = viewport.height - tuning.gun.height - tuning.field.bottom_padding;
        let gun_min_y = gun_max_y - tuning.field.lane_height;

        Self {
            width: viewport.width,
            height: viewport.height,
            gun_width: tuning.gun.width,
            gun_height: tuning.gun.height,
            gun_min_y,
            gun_max_y,
        }
    }

    /// Legal top-left positions for the gun.
    pub fn gun_bounds(&self) -> Bounds {
        Bounds::new(
            0.0,
            self.width - self.gun_width,
            self.gun_min_y,
            self.gun_max_y,
        )
    }

    /// Gun starts horizontally centered at the bottom of its lane.
    pub fn spawn_point(&self) -> (f32, f32) {
        (self.width / 2.0 - self.gun_width / 2.0, self.gun_max_y)
    }

    pub fn lane_lines(&self) -> LaneLines {
        LaneLines {
            top_y: self.gun_min_y,
            bottom_y: self.gun_max_y + self.gun_height,
        }
    }
}
