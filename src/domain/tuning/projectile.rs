/// Gameplay tuning for projectiles.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileTuning {
    /// Projectile width in pixels.
    pub width: f32,

    /// Projectile height in pixels.
    pub height: f32,

    /// Upward travel per tick in pixels.
    pub speed: f32,
}

impl ProjectileTuning {
    pub fn scaled(self, density: f32) -> Self {
        Self {
            width: self.width * density,
            height: self.height * density,
            speed: self.speed * density,
        }
    }
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 15.0,
            speed: 20.0,
        }
    }
}
