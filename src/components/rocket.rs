//! Rocket: the flight phase of a firework.
//!
//! A [`Rocket`] rises under gravity and wind while its fuse burns. On the
//! update where the fuse completes it returns a single [`BurstRequest`] at its
//! current position and expires. Rockets never expire from hitting the floor.

use raylib::prelude::{Color, Vector3};

use crate::components::burst::BurstRequest;
use crate::components::physics::{Atmosphere, Body};
use crate::components::sprite::{DrawSurface, Sprite};
use crate::components::theme::ThemeId;
use crate::error::{SimError, ensure_positive};

pub const DEFAULT_LAUNCH_SPEED: f32 = 160.0;
pub const DEFAULT_FUSE: f32 = 2.0;
pub const DEFAULT_ROCKET_SIZE: f32 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Rocket {
    launch_position: Vector3,
    body: Body,
    fuse_elapsed: f32,
    fuse: f32,
    size: f32,
    theme: ThemeId,
    tint: Color,
    expired: bool,
}

impl Rocket {
    /// Create a rocket at `position`. `fuse` and `size` must be positive.
    pub fn new(
        position: Vector3,
        velocity: Vector3,
        fuse: f32,
        size: f32,
        theme: ThemeId,
        tint: Color,
    ) -> Result<Self, SimError> {
        ensure_positive("rocket fuse", fuse)?;
        ensure_positive("rocket size", size)?;
        Ok(Self::from_parts(position, velocity, fuse, size, theme, tint))
    }

    fn from_parts(
        position: Vector3,
        velocity: Vector3,
        fuse: f32,
        size: f32,
        theme: ThemeId,
        tint: Color,
    ) -> Self {
        Self {
            launch_position: position,
            body: Body::new(position, velocity),
            fuse_elapsed: 0.0,
            fuse,
            size,
            theme,
            tint,
            expired: false,
        }
    }

    /// Integrate one step and burn the fuse.
    ///
    /// Returns `Some` exactly once, on the call where the fuse completes.
    pub fn update(&mut self, dt: f32, atmosphere: &Atmosphere) -> Option<BurstRequest> {
        if self.expired {
            return None;
        }
        self.body.integrate(dt, atmosphere);
        self.fuse_elapsed += dt;
        if self.fuse_elapsed >= self.fuse {
            self.expired = true;
            return Some(BurstRequest {
                origin: self.body.position,
                theme: self.theme,
                tint: self.tint,
            });
        }
        None
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            position: self.body.position,
            size: self.size,
            theme: self.theme,
            tint: self.tint,
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

    pub fn launch_position(&self) -> Vector3 {
        self.launch_position
    }

    pub fn position(&self) -> Vector3 {
        self.body.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.body.velocity
    }

    pub fn fuse_elapsed(&self) -> f32 {
        self.fuse_elapsed
    }

    pub fn fuse(&self) -> f32 {
        self.fuse
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }
}

/// Launch parameters shared by every rocket a spawner fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocketConfig {
    launch_speed: f32,
    fuse: f32,
    size: f32,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            launch_speed: DEFAULT_LAUNCH_SPEED,
            fuse: DEFAULT_FUSE,
            size: DEFAULT_ROCKET_SIZE,
        }
    }
}

impl RocketConfig {
    /// `launch_speed` may be zero or negative; `fuse` and `size` must be positive.
    pub fn new(launch_speed: f32, fuse: f32, size: f32) -> Result<Self, SimError> {
        ensure_positive("rocket fuse", fuse)?;
        ensure_positive("rocket size", size)?;
        if !launch_speed.is_finite() {
            return Err(SimError::NonPositive {
                what: "rocket launch speed",
                value: launch_speed,
            });
        }
        Ok(Self {
            launch_speed,
            fuse,
            size,
        })
    }

    pub fn launch_speed(&self) -> f32 {
        self.launch_speed
    }

    pub fn fuse(&self) -> f32 {
        self.fuse
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Fire a rocket straight up from `origin`.
    pub fn launch(&self, origin: Vector3, theme: ThemeId, tint: Color) -> Rocket {
        Rocket::from_parts(
            origin,
            Vector3::new(0.0, self.launch_speed, 0.0),
            self.fuse,
            self.size,
            theme,
            tint,
        )
    }
}
