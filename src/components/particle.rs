//! Single burst particle.
//!
//! A [`Particle`] ages under gravity and wind until either its lifetime runs
//! out or it falls below the floor. Expiry is terminal: an expired particle
//! ignores further updates and draws nothing.

use raylib::prelude::{Color, Vector3};

use crate::components::physics::{Atmosphere, Body};
use crate::components::sprite::{DrawSurface, Sprite};
use crate::components::theme::{ThemeId, fade};
use crate::error::{SimError, ensure_positive};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    body: Body,
    age: f32,
    lifetime: f32,
    size: f32,
    theme: ThemeId,
    tint: Color,
    expired: bool,
}

impl Particle {
    /// Create a particle. `lifetime` and `size` must be positive.
    pub fn new(
        position: Vector3,
        velocity: Vector3,
        lifetime: f32,
        size: f32,
        theme: ThemeId,
        tint: Color,
    ) -> Result<Self, SimError> {
        ensure_positive("particle lifetime", lifetime)?;
        ensure_positive("particle size", size)?;
        Ok(Self::from_parts(
            Body::new(position, velocity),
            lifetime,
            size,
            theme,
            tint,
        ))
    }

    /// Build from values already checked by a validated config.
    pub(crate) fn from_parts(
        body: Body,
        lifetime: f32,
        size: f32,
        theme: ThemeId,
        tint: Color,
    ) -> Self {
        Self {
            body,
            age: 0.0,
            lifetime,
            size,
            theme,
            tint,
            expired: false,
        }
    }

    /// Integrate one step and flag expiry.
    pub fn update(&mut self, dt: f32, atmosphere: &Atmosphere) {
        if self.expired {
            return;
        }
        self.body.integrate(dt, atmosphere);
        self.age += dt;
        if self.age >= self.lifetime || self.body.position.y < atmosphere.floor_y {
            self.expired = true;
        }
    }

    /// Fraction of the lifetime still left, in `[0, 1]`.
    pub fn remaining_fraction(&self) -> f32 {
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }

    /// Draw record for the current state: size and alpha shrink with age.
    pub fn sprite(&self) -> Sprite {
        let remaining = self.remaining_fraction();
        Sprite {
            position: self.body.position,
            size: self.size * remaining,
            theme: self.theme,
            tint: fade(self.tint, remaining),
        }
    }

    pub fn render(&self, surface: &mut impl DrawSurface) {
        if self.expired {
            return;
        }
        surface.draw_particle(&self.sprite());
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn position(&self) -> Vector3 {
        self.body.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.body.velocity
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }
}
