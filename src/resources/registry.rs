//! Shared collection of live fireworks.
//!
//! The [`Registry`] is the only owner of rockets and particles once they are
//! inserted. It is updated once per frame by the `registry_update_system` and
//! drawn once per frame by the render pass.
//!
//! # Update pass
//!
//! 1. Every entity present when the pass starts is updated exactly once, in
//!    insertion order.
//! 2. Particles created by bursts during the pass go to a side buffer; they
//!    are not updated until the next pass.
//! 3. Expired entities are compacted out in one `retain` after all updates.
//! 4. The side buffer is appended.
//!
//! Removal never happens before an entity's own update in the same pass, and
//! iteration never sees an insertion from the same pass.

use bevy_ecs::prelude::Resource;
use log::trace;

use crate::components::burst::explode;
use crate::components::firework::Firework;
use crate::components::sprite::DrawSurface;
use crate::resources::simcontext::SimContext;

/// Outcome of one [`Registry::update_all`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Entities whose update ran this pass.
    pub updated: usize,
    /// Entities removed after the pass.
    pub expired: usize,
    /// Rockets that burst this pass.
    pub bursts: usize,
    /// Particles appended by those bursts.
    pub burst_particles: usize,
}

/// Live entity counts by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistryCounts {
    pub rockets: usize,
    pub particles: usize,
}

#[derive(Resource, Debug, Default)]
pub struct Registry {
    entities: Vec<Firework>,
    total_inserted: u64,
    total_expired: u64,
    last_report: UpdateReport,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Ownership moves into the registry.
    pub fn insert(&mut self, entity: impl Into<Firework>) {
        self.entities.push(entity.into());
        self.total_inserted += 1;
    }

    /// Append a batch of entities in order.
    pub fn extend<I, E>(&mut self, entities: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Firework>,
    {
        let before = self.entities.len();
        self.entities.extend(entities.into_iter().map(Into::into));
        self.total_inserted += (self.entities.len() - before) as u64;
    }

    /// Update every entity, then prune the expired ones and append burst particles.
    pub fn update_all(&mut self, dt: f32, ctx: &mut SimContext) -> UpdateReport {
        let SimContext {
            atmosphere,
            burst,
            rng,
            ..
        } = ctx;

        let mut report = UpdateReport::default();
        let mut spawned: Vec<Firework> = Vec::new();

        for entity in self.entities.iter_mut() {
            report.updated += 1;
            if let Some(request) = entity.update(dt, atmosphere) {
                let particles = explode(&request, burst, rng);
                report.bursts += 1;
                report.burst_particles += particles.len();
                spawned.extend(particles.into_iter().map(Firework::Particle));
            }
        }

        let before = self.entities.len();
        self.entities.retain(|e| !e.is_expired());
        report.expired = before - self.entities.len();
        self.total_expired += report.expired as u64;

        self.extend(spawned);

        if report.expired > 0 || report.bursts > 0 {
            trace!(
                "Registry pass: updated={} expired={} bursts={} new_particles={} live={}",
                report.updated,
                report.expired,
                report.bursts,
                report.burst_particles,
                self.entities.len()
            );
        }
        self.last_report = report;
        report
    }

    /// Draw every live entity once, in insertion order.
    pub fn render_all(&self, surface: &mut impl DrawSurface) {
        for entity in &self.entities {
            entity.render(surface);
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Firework> {
        self.entities.iter()
    }

    pub fn counts(&self) -> RegistryCounts {
        let rockets = self.entities.iter().filter(|e| e.is_rocket()).count();
        RegistryCounts {
            rockets,
            particles: self.entities.len() - rockets,
        }
    }

    /// Entities inserted since creation.
    pub fn total_inserted(&self) -> u64 {
        self.total_inserted
    }

    /// Entities pruned since creation.
    pub fn total_expired(&self) -> u64 {
        self.total_expired
    }

    pub fn last_report(&self) -> UpdateReport {
        self.last_report
    }

    /// Drop every entity.
    pub fn clear(&mut self) {
        self.total_expired += self.entities.len() as u64;
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::particle::Particle;
    use crate::components::physics::Atmosphere;
    use crate::components::rocket::Rocket;
    use crate::components::sprite::Sprite;
    use crate::components::theme::ThemeId;
    use raylib::prelude::{Color, Vector3};

    fn calm_ctx() -> SimContext {
        let mut ctx = SimContext::with_seed(11);
        ctx.atmosphere = Atmosphere::calm();
        ctx
    }

    fn particle(lifetime: f32) -> Particle {
        Particle::new(
            Vector3::new(0.0, 10.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            lifetime,
            1.0,
            ThemeId(0),
            Color::WHITE,
        )
        .unwrap()
    }

    fn rocket(fuse: f32) -> Rocket {
        Rocket::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 50.0, 0.0),
            fuse,
            1.0,
            ThemeId(1),
            Color::RED,
        )
        .unwrap()
    }

    #[test]
    fn test_insert_and_counts() {
        let mut registry = Registry::new();
        registry.insert(rocket(1.0));
        registry.insert(particle(1.0));
        registry.insert(particle(1.0));
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.counts(),
            RegistryCounts {
                rockets: 1,
                particles: 2
            }
        );
        assert_eq!(registry.total_inserted(), 3);
    }

    #[test]
    fn test_expired_entities_are_pruned_after_their_update() {
        let mut ctx = calm_ctx();
        let mut registry = Registry::new();
        registry.insert(particle(0.5));
        registry.insert(particle(2.0));
        registry.insert(particle(0.5));

        let report = registry.update_all(1.0, &mut ctx);
        assert_eq!(report.updated, 3);
        assert_eq!(report.expired, 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.total_expired(), 2);
    }

    #[test]
    fn test_every_entity_updated_exactly_once_per_pass() {
        let mut ctx = calm_ctx();
        let mut registry = Registry::new();
        for i in 0..10 {
            registry.insert(particle(0.2 + i as f32 * 0.2));
        }
        registry.update_all(0.25, &mut ctx);
        for entity in registry.iter() {
            if let Firework::Particle(p) = entity {
                assert!((p.age() - 0.25).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_burst_particles_join_after_the_pass() {
        let mut ctx = calm_ctx();
        let count = ctx.burst.count();
        let mut registry = Registry::new();
        registry.insert(rocket(1.0));

        let report = registry.update_all(1.0, &mut ctx);
        assert_eq!(report.bursts, 1);
        assert_eq!(report.burst_particles, count);
        assert_eq!(report.updated, 1);
        assert_eq!(report.expired, 1);
        assert_eq!(registry.len(), count);
        assert_eq!(registry.counts().rockets, 0);
        for entity in registry.iter() {
            if let Firework::Particle(p) = entity {
                assert_eq!(p.age(), 0.0);
                assert_eq!(p.position(), Vector3::new(0.0, 50.0, 0.0));
                assert_eq!(p.theme(), ThemeId(1));
            }
        }
    }

    #[test]
    fn test_back_to_back_bursts_in_one_pass() {
        let mut ctx = calm_ctx();
        let count = ctx.burst.count();
        let mut registry = Registry::new();
        registry.insert(rocket(0.5));
        registry.insert(rocket(0.5));
        let report = registry.update_all(0.5, &mut ctx);
        assert_eq!(report.updated, 2);
        assert_eq!(report.bursts, 2);
        assert_eq!(registry.len(), 2 * count);
    }

    #[test]
    fn test_render_all_draws_each_live_entity_once_without_mutation() {
        let mut registry = Registry::new();
        registry.insert(rocket(1.0));
        registry.insert(particle(1.0));

        let mut first: Vec<Sprite> = Vec::new();
        let mut second: Vec<Sprite> = Vec::new();
        registry.render_all(&mut first);
        registry.render_all(&mut second);
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extend_and_clear() {
        let mut registry = Registry::new();
        registry.extend(vec![particle(1.0), particle(1.0)]);
        assert_eq!(registry.len(), 2);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.total_expired(), 2);
    }
}
