use crate::domain::state::Projectile;

/// Live projectiles in insertion order (which is also draw order).
#[derive(Debug, Default)]
pub struct ProjectileStore {
    projectiles: Vec<Projectile>,
}

impl ProjectileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Removes every projectile matching `predicate` in one pass, keeping survivor order.
    /// Returns how many were removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Projectile) -> bool,
    {
        let before = self.projectiles.len();
        self.projectiles.retain(|p| !predicate(p));
        before - self.projectiles.len()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Projectile> {
        self.projectiles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.projectiles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projectile(id: u64, y: f32) -> Projectile {
        Projectile {
            id,
            x: 0.0,
            y,
            width: 5.0,
            height: 15.0,
            speed: 20.0,
        }
    }

    fn ids(store: &ProjectileStore) -> Vec<u64> {
        store.iter().map(|p| p.id).collect()
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = ProjectileStore::new();
        assert!(store.is_empty());

        store.add(projectile(1, 10.0));
        store.add(projectile(2, 20.0));
        store.add(projectile(3, 30.0));

        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.get(1).map(|p| p.id), Some(2));
        assert!(store.get(3).is_none());
    }

    #[test]
    fn remove_where_keeps_survivor_order() {
        let mut store = ProjectileStore::new();
        for id in 1..=5 {
            store.add(projectile(id, id as f32));
        }

        let removed = store.remove_where(|p| p.id % 2 == 0);

        assert_eq!(removed, 2);
        assert_eq!(ids(&store), vec![1, 3, 5]);
    }

    #[test]
    fn remove_where_without_matches_is_a_no_op() {
        let mut store = ProjectileStore::new();
        store.add(projectile(1, 10.0));

        assert_eq!(store.remove_where(|p| p.y < 0.0), 0);
        assert_eq!(ids(&store), vec![1]);
    }
}
