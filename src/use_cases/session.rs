// Authoritative state for one play session and the input/tick workflows over it.

use super::types::{GameEvent, WorldUpdate};
use crate::domain::systems::{gun, projectiles};
use crate::domain::{
    FieldSnapshot, Gun, GunSnapshot, PlayField, ProjectileSnapshot, ProjectileStore, Tuning,
    Viewport,
};
use tracing::{debug, info};

/// Plain mutable session state. Only the world task touches it, so nothing here locks.
#[derive(Debug)]
pub struct GameSession {
    tuning: Tuning,
    // None until the first measurement; never re-measured afterwards.
    field: Option<PlayField>,
    gun: Gun,
    projectiles: ProjectileStore,
    next_projectile_id: u64,
    tick: u64,
}

impl GameSession {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            field: None,
            gun: Gun::new(tuning.gun.width, tuning.gun.height),
            projectiles: ProjectileStore::new(),
            next_projectile_id: 1,
            tick: 0,
        }
    }

    pub fn field(&self) -> Option<&PlayField> {
        self.field.as_ref()
    }

    pub fn gun(&self) -> &Gun {
        &self.gun
    }

    pub fn projectiles(&self) -> &ProjectileStore {
        &self.projectiles
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn is_measured(&self) -> bool {
        self.field.is_some()
    }

    /// Measures the play field once and places the gun at its spawn point.
    ///
    /// Returns false when the field was already measured or the viewport is unusable.
    pub fn measure(&mut self, viewport: Viewport) -> bool {
        if self.field.is_some() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "field already measured; ignoring viewport"
            );
            return false;
        }
        if !viewport.is_measurable() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "viewport not measurable"
            );
            return false;
        }

        let field = PlayField::measure(viewport, &self.tuning);
        (self.gun.x, self.gun.y) = field.spawn_point();
        info!(
            width = field.width,
            height = field.height,
            gun_min_y = field.gun_min_y,
            gun_max_y = field.gun_max_y,
            "play field measured"
        );
        self.field = Some(field);
        true
    }

    /// Applies a drag delta to the gun. Ignored until the field is measured.
    ///
    /// Non-finite deltas are dropped: a NaN would survive the clamp and stick to the gun.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        let Some(field) = self.field.as_ref() else {
            return;
        };
        if !dx.is_finite() || !dy.is_finite() {
            debug!(dx, dy, "non-finite drag ignored");
            return;
        }
        gun::drag_gun(&mut self.gun, field, dx, dy);
    }

    /// Spawns one projectile at the gun's muzzle. Returns the new projectile id, or
    /// `None` when the field is not measured yet.
    pub fn fire(&mut self) -> Option<u64> {
        if self.field.is_none() {
            return None;
        }

        let id = self.next_projectile_id;
        self.next_projectile_id = self.next_projectile_id.wrapping_add(1);
        self.projectiles
            .add(gun::muzzle_projectile(&self.gun, id, self.tuning.projectile));
        debug!(projectile_id = id, x = self.gun.x, y = self.gun.y, "fired");
        Some(id)
    }

    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::Measure { viewport } | GameEvent::DragStart { viewport } => {
                self.measure(viewport);
            }
            GameEvent::Drag { dx, dy } => self.drag(dx, dy),
            GameEvent::Fire => {
                self.fire();
            }
        }
    }

    /// Runs one fixed-interval update. Returns the number of projectiles evicted.
    pub fn tick(&mut self) -> usize {
        self.tick += 1;
        projectiles::tick_projectiles(&mut self.projectiles)
    }

    pub fn snapshot(&self) -> WorldUpdate {
        WorldUpdate {
            tick: self.tick,
            field: self.field.as_ref().map(FieldSnapshot::from),
            gun: GunSnapshot::from(&self.gun),
            projectiles: self
                .projectiles
                .iter()
                .map(ProjectileSnapshot::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f32, height: f32) -> Viewport {
        Viewport { width, height }
    }

    fn measured() -> GameSession {
        let mut session = GameSession::new(Tuning::default());
        assert!(session.measure(viewport(400.0, 800.0)));
        session
    }

    #[test]
    fn fire_before_measure_is_a_no_op() {
        let mut session = GameSession::new(Tuning::default());

        assert_eq!(session.fire(), None);
        assert!(session.projectiles().is_empty());
    }

    #[test]
    fn drag_before_measure_is_a_no_op() {
        let mut session = GameSession::new(Tuning::default());
        session.drag(100.0, 100.0);

        assert_eq!((session.gun().x, session.gun().y), (0.0, 0.0));
    }

    #[test]
    fn measure_places_gun_and_is_one_shot() {
        let mut session = measured();
        assert_eq!((session.gun().x, session.gun().y), (175.0, 720.0));

        session.drag(-100.0, -30.0);
        assert!(!session.measure(viewport(1000.0, 2000.0)));

        let field = session.field().copied();
        assert_eq!(field.map(|f| (f.width, f.height)), Some((400.0, 800.0)));
        // Re-measuring must not reset the gun either.
        assert_eq!((session.gun().x, session.gun().y), (75.0, 690.0));
    }

    #[test]
    fn unmeasurable_viewport_leaves_session_unmeasured() {
        let mut session = GameSession::new(Tuning::default());

        assert!(!session.measure(viewport(0.0, 0.0)));
        assert!(!session.is_measured());
        assert!(session.measure(viewport(400.0, 800.0)));
    }

    #[test]
    fn drag_start_measures_like_first_layout() {
        let mut session = GameSession::new(Tuning::default());
        session.apply(GameEvent::DragStart {
            viewport: viewport(400.0, 800.0),
        });

        assert!(session.is_measured());
        assert_eq!(session.gun().y, 720.0);
    }

    #[test]
    fn drag_results_always_stay_in_bounds() {
        let mut session = measured();
        let deltas = [
            (5.0, 5.0),
            (-3_000.0, 12.0),
            (3_000.0, -3_000.0),
            (0.5, 3_000.0),
            (-1.0e9, -1.0e9),
            (1.0e9, 1.0e9),
        ];

        for (dx, dy) in deltas {
            session.drag(dx, dy);
            let gun = session.gun();
            assert!((0.0..=350.0).contains(&gun.x), "x out of range: {}", gun.x);
            assert!((640.0..=720.0).contains(&gun.y), "y out of range: {}", gun.y);
        }
    }

    #[test]
    fn non_finite_drag_leaves_gun_usable() {
        let mut session = measured();

        session.drag(f32::NAN, 0.0);
        session.drag(0.0, f32::NAN);
        session.apply(GameEvent::Drag {
            dx: f32::INFINITY,
            dy: f32::NEG_INFINITY,
        });
        assert_eq!((session.gun().x, session.gun().y), (175.0, 720.0));

        session.drag(-10.0, 0.0);
        let gun = session.gun();
        assert_eq!((gun.x, gun.y), (165.0, 720.0));
        assert!((0.0..=350.0).contains(&gun.x));
        assert!((640.0..=720.0).contains(&gun.y));
    }

    #[test]
    fn fire_adds_exactly_one_centered_projectile() {
        let mut session = measured();
        session.drag(-60.0, -20.0);

        let id = session.fire();

        assert_eq!(id, Some(1));
        assert_eq!(session.projectiles().len(), 1);
        let p = session.projectiles().get(0).expect("projectile present");
        assert_eq!(p.center_x(), session.gun().center_x());
        assert_eq!(p.y, session.gun().y);
    }

    #[test]
    fn fired_projectile_flies_off_and_is_evicted_on_tick_36() {
        let mut session = measured();
        // Lift the gun to y = 700 so the numbers match the documented example.
        session.drag(0.0, -20.0);
        assert_eq!((session.gun().x, session.gun().y), (175.0, 700.0));
        session.fire();

        for n in 1..=35 {
            assert_eq!(session.tick(), 0);
            let y = session.projectiles().get(0).map(|p| p.y);
            assert_eq!(y, Some(700.0 - n as f32 * 20.0));
        }

        assert_eq!(session.tick(), 1);
        assert!(session.projectiles().is_empty());
        assert_eq!(session.tick_count(), 36);
    }

    #[test]
    fn firing_three_times_keeps_order_and_eviction_keeps_the_rest() {
        let mut session = measured();

        // p1 and p3 from the lane floor, p2 from the top of the lane.
        session.fire();
        session.drag(0.0, -80.0);
        session.fire();
        session.drag(0.0, 80.0);
        session.fire();
        let ids: Vec<u64> = session.projectiles().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // p2 starts 80px higher, so it leaves first (640 - 33 * 20 < -15).
        for _ in 0..32 {
            assert_eq!(session.tick(), 0);
        }
        assert_eq!(session.tick(), 1);

        let ids: Vec<u64> = session.projectiles().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn snapshot_reflects_state_in_insertion_order() {
        let mut session = GameSession::new(Tuning::default());
        let empty = session.snapshot();
        assert_eq!(empty.tick, 0);
        assert!(empty.field.is_none());
        assert!(empty.projectiles.is_empty());

        session.measure(viewport(400.0, 800.0));
        session.fire();
        session.drag(50.0, 0.0);
        session.fire();
        session.tick();

        let snap = session.snapshot();
        assert_eq!(snap.tick, 1);
        let field = snap.field.expect("field measured");
        assert_eq!((field.lane_top_y, field.lane_bottom_y), (640.0, 750.0));
        assert_eq!(snap.gun.x, 225.0);
        let xs: Vec<(u64, f32)> = snap.projectiles.iter().map(|p| (p.id, p.x)).collect();
        assert_eq!(xs, vec![(1, 197.5), (2, 247.5)]);
        assert!(snap.projectiles.iter().all(|p| p.y == 700.0));
    }
}
