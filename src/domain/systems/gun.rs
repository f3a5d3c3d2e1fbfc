use crate::domain::field::PlayField;
use crate::domain::state::{Gun, Projectile};
use crate::domain::tuning::ProjectileTuning;

/// Moves the gun by a drag delta, clamped to the field's gun bounds.
pub fn drag_gun(gun: &mut Gun, field: &PlayField, dx: f32, dy: f32) {
    let (x, y) = field.gun_bounds().clamp_moved(gun.x, gun.y, dx, dy);
    gun.x = x;
    gun.y = y;
}

/// Builds a projectile at the gun's muzzle: centered horizontally, leading edge on the gun's top.
pub fn muzzle_projectile(gun: &Gun, id: u64, cfg: ProjectileTuning) -> Projectile {
    Projectile {
        id,
        x: gun.center_x() - cfg.width / 2.0,
        y: gun.y,
        width: cfg.width,
        height: cfg.height,
        speed: cfg.speed,
    }
}
