//! Explosion burst: turns one fuse expiry into a batch of particles.
//!
//! A burst is not stored anywhere. A rocket whose fuse runs out hands back a
//! [`BurstRequest`] and the registry calls [`explode`] to build every particle
//! of the burst in one go.
//!
//! # Distribution
//!
//! - Direction: uniform on the unit sphere
//! - Speed: uniform in `[speed_min, speed_max]`
//! - Velocity: `direction * speed + (0, upward_bias, 0)`
//! - Lifetime: uniform in `[lifetime_min, lifetime_max]`
//! - Theme and tint: inherited from the rocket

use std::f32::consts::TAU;

use fastrand::Rng;
use raylib::prelude::{Color, Vector3};

use crate::components::particle::Particle;
use crate::components::physics::Body;
use crate::components::theme::ThemeId;
use crate::error::{SimError, ensure_positive, ensure_range};

pub const DEFAULT_BURST_COUNT: usize = 64;
pub const DEFAULT_BURST_SPEED: (f32, f32) = (40.0, 90.0);
pub const DEFAULT_BURST_LIFETIME: (f32, f32) = (1.2, 2.6);
pub const DEFAULT_BURST_UPWARD_BIAS: f32 = 15.0;
pub const DEFAULT_BURST_SIZE: f32 = 6.0;

/// Where a burst happens and how it looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstRequest {
    pub origin: Vector3,
    pub theme: ThemeId,
    pub tint: Color,
}

/// Validated burst parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstConfig {
    count: usize,
    speed: (f32, f32),
    lifetime: (f32, f32),
    upward_bias: f32,
    size: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_BURST_COUNT,
            speed: DEFAULT_BURST_SPEED,
            lifetime: DEFAULT_BURST_LIFETIME,
            upward_bias: DEFAULT_BURST_UPWARD_BIAS,
            size: DEFAULT_BURST_SIZE,
        }
    }
}

impl BurstConfig {
    /// Build a burst config.
    ///
    /// `count` must be non-zero, both ranges must satisfy `0 <= min <= max`,
    /// the minimum lifetime and the size must be positive.
    pub fn new(
        count: usize,
        speed: (f32, f32),
        lifetime: (f32, f32),
        upward_bias: f32,
        size: f32,
    ) -> Result<Self, SimError> {
        if count == 0 {
            return Err(SimError::NonPositive {
                what: "burst count",
                value: 0.0,
            });
        }
        ensure_range("burst speed", speed.0, speed.1)?;
        ensure_range("burst lifetime", lifetime.0, lifetime.1)?;
        ensure_positive("burst lifetime minimum", lifetime.0)?;
        ensure_positive("burst particle size", size)?;
        if !upward_bias.is_finite() {
            return Err(SimError::NonPositive {
                what: "burst upward bias",
                value: upward_bias,
            });
        }
        Ok(Self {
            count,
            speed,
            lifetime,
            upward_bias,
            size,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn speed_range(&self) -> (f32, f32) {
        self.speed
    }

    pub fn lifetime_range(&self) -> (f32, f32) {
        self.lifetime
    }

    pub fn upward_bias(&self) -> f32 {
        self.upward_bias
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Sample a random f32 in the range [min, max].
/// If the range is smaller than EPSILON, returns min directly.
#[inline]
pub(crate) fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

/// Uniform direction on the unit sphere.
fn random_unit_vector(rng: &mut Rng) -> Vector3 {
    let z = random_f32_range(rng, -1.0, 1.0);
    let phi = rng.f32() * TAU;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vector3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Build all particles for one burst.
pub fn explode(request: &BurstRequest, config: &BurstConfig, rng: &mut Rng) -> Vec<Particle> {
    let bias = Vector3::new(0.0, config.upward_bias, 0.0);
    let mut particles = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let speed = random_f32_range(rng, config.speed.0, config.speed.1);
        let velocity = random_unit_vector(rng).scale_by(speed) + bias;
        let lifetime = random_f32_range(rng, config.lifetime.0, config.lifetime.1);
        particles.push(Particle::from_parts(
            Body::new(request.origin, velocity),
            lifetime,
            config.size,
            request.theme,
            request.tint,
        ));
    }
    particles
}
