//! Simulation context resource.
//!
//! Everything the spawners and the registry read or mutate besides the
//! entities themselves lives here: the atmosphere (gravity, wind, floor), the
//! rocket and burst parameters, the palette, and the random generator. It is
//! built once at startup from [`SimConfig`] and dropped with the world.
//!
//! Wind speed is a plain field holding a horizontal acceleration, in world
//! units per second squared. Input code writes it, the registry update reads
//! it once per frame through [`Atmosphere`].

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use log::info;

use crate::components::burst::BurstConfig;
use crate::components::physics::Atmosphere;
use crate::components::rocket::RocketConfig;
use crate::components::theme::Palette;
use crate::error::SimError;
use crate::resources::simconfig::SimConfig;

#[derive(Resource)]
pub struct SimContext {
    pub atmosphere: Atmosphere,
    pub rocket: RocketConfig,
    pub burst: BurstConfig,
    pub palette: Palette,
    pub rng: Rng,
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(
            Atmosphere::default(),
            RocketConfig::default(),
            BurstConfig::default(),
            Palette::default(),
            Rng::new(),
        )
    }
}

impl SimContext {
    pub fn new(
        atmosphere: Atmosphere,
        rocket: RocketConfig,
        burst: BurstConfig,
        palette: Palette,
        rng: Rng,
    ) -> Self {
        Self {
            atmosphere,
            rocket,
            burst,
            palette,
            rng,
        }
    }

    /// Default parameters with a deterministic generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            ..Self::default()
        }
    }

    /// Build from a loaded configuration, validating every tunable.
    pub fn from_config(config: &SimConfig, seed: Option<u64>) -> Result<Self, SimError> {
        if !config.gravity.is_finite() || config.gravity < 0.0 {
            return Err(SimError::NonPositive {
                what: "gravity",
                value: config.gravity,
            });
        }
        if !config.wind_speed.is_finite() {
            return Err(SimError::NonPositive {
                what: "wind speed",
                value: config.wind_speed,
            });
        }
        let rocket = RocketConfig::new(config.launch_speed, config.fuse, config.rocket_size)?;
        let burst = BurstConfig::new(
            config.burst_count,
            (config.burst_speed_min, config.burst_speed_max),
            (config.burst_lifetime_min, config.burst_lifetime_max),
            config.burst_upward_bias,
            config.burst_size,
        )?;
        let atmosphere = Atmosphere {
            gravity: config.gravity,
            wind_speed: config.wind_speed,
            floor_y: config.floor,
        };
        let rng = match seed {
            Some(seed) => {
                info!("Using RNG seed {}", seed);
                Rng::with_seed(seed)
            }
            None => Rng::new(),
        };
        Ok(Self::new(atmosphere, rocket, burst, Palette::default(), rng))
    }

    /// Current wind acceleration along +X.
    pub fn wind_speed(&self) -> f32 {
        self.atmosphere.wind_speed
    }

    pub fn set_wind_speed(&mut self, wind_speed: f32) {
        self.atmosphere.wind_speed = wind_speed;
    }

    /// Add `delta` to the current wind speed and return the new value.
    pub fn adjust_wind(&mut self, delta: f32) -> f32 {
        self.atmosphere.wind_speed += delta;
        self.atmosphere.wind_speed
    }
}
