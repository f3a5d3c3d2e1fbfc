// Gameplay tuning, kept separate from runtime/server configuration.

pub mod field;
pub mod gun;
pub mod projectile;

pub use field::FieldTuning;
pub use gun::GunTuning;
pub use projectile::ProjectileTuning;

/// All gameplay sizes, in pixels for one display density.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tuning {
    pub gun: GunTuning,
    pub projectile: ProjectileTuning,
    pub field: FieldTuning,
}

impl Tuning {
    /// Converts the density-independent defaults to pixels.
    pub fn for_density(density: f32) -> Self {
        let base = Self::default();
        Self {
            gun: base.gun.scaled(density),
            projectile: base.projectile.scaled(density),
            field: base.field.scaled(density),
        }
    }
}
