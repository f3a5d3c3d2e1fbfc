// Domain layer: core simulation types and rules.

pub mod bounds;
pub mod field;
pub mod state;
pub mod store;
pub mod systems;
pub mod tuning;

pub use bounds::Bounds;
pub use field::{LaneLines, PlayField, Viewport};
pub use state::{FieldSnapshot, Gun, GunSnapshot, Projectile, ProjectileSnapshot};
pub use store::ProjectileStore;
pub use tuning::Tuning;
