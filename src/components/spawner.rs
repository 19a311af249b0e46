//! Fixed-position rocket launcher.
//!
//! A [`Spawner`] is an ECS component: the `spawner_system` drives every
//! spawner once per frame. Each time the accumulated time reaches the interval
//! one rocket is launched into the [`Registry`] and the accumulator resets to
//! zero. Overshoot is discarded, so a long frame never fires more than one
//! rocket.

use bevy_ecs::prelude::Component;
use log::debug;
use raylib::prelude::Vector3;

use crate::error::{SimError, ensure_positive};
use crate::resources::registry::Registry;
use crate::resources::simcontext::SimContext;

#[derive(Component, Clone, Debug, PartialEq)]
pub struct Spawner {
    origin: Vector3,
    interval: f32,
    time_since_last: f32,
    launched: u64,
}

impl Spawner {
    /// Create a spawner at `origin` firing every `interval` seconds.
    pub fn new(origin: Vector3, interval: f32) -> Result<Self, SimError> {
        ensure_positive("spawner interval", interval)?;
        Ok(Self {
            origin,
            interval,
            time_since_last: 0.0,
            launched: 0,
        })
    }

    /// Advance the clock. Returns true when a launch is due.
    ///
    /// Non-positive `dt` is ignored.
    pub fn tick(&mut self, dt: f32) -> bool {
        if dt <= 0.0 {
            return false;
        }
        self.time_since_last += dt;
        if self.time_since_last >= self.interval {
            self.time_since_last = 0.0;
            self.launched += 1;
            return true;
        }
        false
    }

    /// Advance the clock and, when due, launch one rocket into `registry`.
    pub fn update(&mut self, dt: f32, ctx: &mut SimContext, registry: &mut Registry) -> bool {
        if !self.tick(dt) {
            return false;
        }
        let theme = ctx.palette.random(&mut ctx.rng);
        let rocket = ctx.rocket.launch(self.origin, theme, ctx.palette.tint(theme));
        debug!(
            "Spawner at ({:.1}, {:.1}, {:.1}) launched rocket #{} with theme {}",
            self.origin.x, self.origin.y, self.origin.z, self.launched, theme.0
        );
        registry.insert(rocket);
        true
    }

    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn time_since_last(&self) -> f32 {
        self.time_since_last
    }

    /// Rockets launched so far.
    pub fn launched(&self) -> u64 {
        self.launched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        assert!(Spawner::new(Vector3::new(0.0, 0.0, 0.0), 0.0).is_err());
        assert!(Spawner::new(Vector3::new(0.0, 0.0, 0.0), -2.0).is_err());
    }

    #[test]
    fn test_fires_on_each_interval_crossing() {
        let mut s = Spawner::new(Vector3::new(0.0, 0.0, 0.0), 2.0).unwrap();
        let mut fired_at = Vec::new();
        for step in 1..=12 {
            if s.tick(0.5) {
                fired_at.push(step as f32 * 0.5);
            }
        }
        assert_eq!(fired_at, vec![2.0, 4.0, 6.0]);
        assert_eq!(s.launched(), 3);
    }

    #[test]
    fn test_large_delta_fires_once_and_discards_overshoot() {
        let mut s = Spawner::new(Vector3::new(0.0, 0.0, 0.0), 2.0).unwrap();
        assert!(s.tick(5.0));
        assert_eq!(s.launched(), 1);
        assert!(approx_eq(s.time_since_last(), 0.0));
        assert!(!s.tick(1.0));
    }

    #[test]
    fn test_accumulator_stays_below_interval() {
        let mut s = Spawner::new(Vector3::new(0.0, 0.0, 0.0), 1.0).unwrap();
        for _ in 0..50 {
            s.tick(0.37);
            assert!(s.time_since_last() >= 0.0 && s.time_since_last() < s.interval());
        }
    }

    #[test]
    fn test_zero_delta_is_ignored() {
        let mut s = Spawner::new(Vector3::new(0.0, 0.0, 0.0), 1.0).unwrap();
        assert!(!s.tick(0.0));
        assert!(approx_eq(s.time_since_last(), 0.0));
    }

    #[test]
    fn test_update_inserts_rocket_at_origin() {
        let origin = Vector3::new(100.0, 0.0, 0.0);
        let mut s = Spawner::new(origin, 1.0).unwrap();
        let mut ctx = SimContext::with_seed(5);
        let mut registry = Registry::default();

        assert!(!s.update(0.5, &mut ctx, &mut registry));
        assert!(registry.is_empty());
        assert!(s.update(0.5, &mut ctx, &mut registry));
        assert_eq!(registry.len(), 1);

        let first = registry.iter().next().unwrap();
        assert!(first.is_rocket());
        assert_eq!(first.position(), origin);
    }
}
