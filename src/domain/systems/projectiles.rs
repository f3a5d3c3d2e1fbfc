use crate::domain::state::Projectile;
use crate::domain::store::ProjectileStore;
use tracing::trace;

/// Advances every projectile by one tick, then evicts the ones that left the field.
///
/// Movement and eviction run as separate passes so a projectile that crosses the
/// threshold during this tick is evicted on this tick. Returns the number evicted.
pub fn tick_projectiles(store: &mut ProjectileStore) -> usize {
    // Integrate projectile movement (straight up, screen coordinates grow downward).
    for p in store.iter_mut() {
        p.y -= p.speed;
    }

    let evicted = store.remove_where(Projectile::is_off_screen);
    if evicted > 0 {
        trace!(evicted, remaining = store.len(), "projectiles left the field");
    }
    evicted
}
