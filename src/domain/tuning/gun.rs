/// Gameplay tuning for the player-controlled gun.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GunTuning {
    /// Gun width in pixels.
    pub width: f32,

    /// Gun height in pixels.
    pub height: f32,
}

impl GunTuning {
    pub fn scaled(self, density: f32) -> Self {
        Self {
            width: self.width * density,
            height: self.height * density,
        }
    }
}

impl Default for GunTuning {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 30.0,
        }
    }
}
