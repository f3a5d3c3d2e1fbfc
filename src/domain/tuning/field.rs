/// Paddings that carve the gun lane out of the measured play field.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTuning {
    /// Gap between the bottom of the lane and the bottom of the field.
    pub bottom_padding: f32,

    /// Vertical travel available to the gun.
    pub lane_height: f32,
}

impl FieldTuning {
    pub fn scaled(self, density: f32) -> Self {
        Self {
            bottom_padding: self.bottom_padding * density,
            lane_height: self.lane_height * density,
        }
    }
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            bottom_padding: 50.0,
            lane_height: 80.0,
        }
    }
}
