//! Point-mass integration shared by rockets and particles.
//!
//! Two accelerations act on every body: gravity along -Y and wind along +X.
//! Integration is semi-implicit Euler: velocity first, then position from the
//! updated velocity.

use raylib::prelude::Vector3;

/// Default downward acceleration in world units per second squared.
pub const DEFAULT_GRAVITY: f32 = 60.0;
/// Default ground height. Particles below it expire.
pub const DEFAULT_FLOOR_Y: f32 = 0.0;

/// Environment read by every update call of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    /// Magnitude of the downward acceleration.
    pub gravity: f32,
    /// Wind, applied as a horizontal acceleration along +X (`v.x += wind_speed * dt`).
    /// Negative values blow toward -X.
    pub wind_speed: f32,
    /// Particles whose Y drops below this expire.
    pub floor_y: f32,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            wind_speed: 0.0,
            floor_y: DEFAULT_FLOOR_Y,
        }
    }
}

impl Atmosphere {
    /// Atmosphere with no gravity and no wind. Useful for tests.
    pub fn calm() -> Self {
        Self {
            gravity: 0.0,
            wind_speed: 0.0,
            floor_y: f32::NEG_INFINITY,
        }
    }

    /// Sum of gravity and wind.
    pub fn acceleration(&self) -> Vector3 {
        Vector3::new(self.wind_speed, -self.gravity, 0.0)
    }
}

/// Position and velocity of a simulated point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl Body {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }

    /// Advance by `dt` seconds.
    pub fn integrate(&mut self, dt: f32, atmosphere: &Atmosphere) {
        self.velocity += atmosphere.acceleration().scale_by(dt);
        self.position += self.velocity.scale_by(dt);
    }
}
