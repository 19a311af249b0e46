//! The entity family held by the registry.
//!
//! [`Firework`] is a flat tagged variant over the two kinds of live entity.
//! Bursts are not entities: a rocket's update hands back a
//! [`BurstRequest`] and the registry turns it into particles.

use raylib::prelude::Vector3;

use crate::components::burst::BurstRequest;
use crate::components::particle::Particle;
use crate::components::physics::Atmosphere;
use crate::components::rocket::Rocket;
use crate::components::sprite::DrawSurface;

#[derive(Clone, Debug, PartialEq)]
pub enum Firework {
    Rocket(Rocket),
    Particle(Particle),
}

impl Firework {
    /// Advance one step. Only a rocket whose fuse just completed returns `Some`.
    pub fn update(&mut self, dt: f32, atmosphere: &Atmosphere) -> Option<BurstRequest> {
        match self {
            Firework::Rocket(rocket) => rocket.update(dt, atmosphere),
            Firework::Particle(particle) => {
                particle.update(dt, atmosphere);
                None
            }
        }
    }

    pub fn render(&self, surface: &mut impl DrawSurface) {
        match self {
            Firework::Rocket(rocket) => rocket.render(surface),
            Firework::Particle(particle) => particle.render(surface),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self {
            Firework::Rocket(rocket) => rocket.is_expired(),
            Firework::Particle(particle) => particle.is_expired(),
        }
    }

    pub fn position(&self) -> Vector3 {
        match self {
            Firework::Rocket(rocket) => rocket.position(),
            Firework::Particle(particle) => particle.position(),
        }
    }

    pub fn is_rocket(&self) -> bool {
        matches!(self, Firework::Rocket(_))
    }
}

impl From<Rocket> for Firework {
    fn from(rocket: Rocket) -> Self {
        Firework::Rocket(rocket)
    }
}

impl From<Particle> for Firework {
    fn from(particle: Particle) -> Self {
        Firework::Particle(particle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::Sprite;
    use crate::components::theme::ThemeId;
    use raylib::prelude::Color;

    #[test]
    fn test_particle_variant_never_bursts() {
        let p = Particle::new(
            Vector3::new(0.0, 5.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            0.5,
            1.0,
            ThemeId(0),
            Color::WHITE,
        )
        .unwrap();
        let mut f = Firework::from(p);
        assert!(!f.is_rocket());
        assert!(f.update(1.0, &Atmosphere::calm()).is_none());
        assert!(f.is_expired());
    }

    #[test]
    fn test_rocket_variant_dispatches() {
        let r = Rocket::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 10.0, 0.0),
            1.0,
            1.0,
            ThemeId(0),
            Color::WHITE,
        )
        .unwrap();
        let mut f = Firework::from(r);
        assert!(f.is_rocket());
        let mut drawn: Vec<Sprite> = Vec::new();
        f.render(&mut drawn);
        assert_eq!(drawn.len(), 1);
        assert!(f.update(1.0, &Atmosphere::calm()).is_some());
        assert!(f.is_expired());
        assert_eq!(f.position(), Vector3::new(0.0, 10.0, 0.0));
    }
}
