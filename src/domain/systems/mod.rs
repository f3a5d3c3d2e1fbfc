// Per-tick and per-input simulation rules.

pub mod gun;
pub mod projectiles;
