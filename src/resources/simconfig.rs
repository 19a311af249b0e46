//! Simulation configuration resource.
//!
//! Manages window, physics, rocket, burst, and spawner settings loaded from an
//! INI configuration file. Provides defaults for safe startup and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 720
//! target_fps = 60
//!
//! [physics]
//! gravity = 60.0
//! wind_speed = 0.0
//! floor = 0.0
//!
//! [rocket]
//! launch_speed = 160.0
//! fuse = 2.0
//! size = 4.0
//!
//! [burst]
//! count = 64
//! speed_min = 40.0
//! speed_max = 90.0
//! lifetime_min = 1.2
//! lifetime_max = 2.6
//! upward_bias = 15.0
//! size = 6.0
//!
//! [spawner.left]
//! x = -100.0
//! y = 0.0
//! z = 0.0
//! interval = 2.0
//! ```
//!
//! Every section whose name starts with `spawner.` defines one spawner. With
//! none present a single spawner at (100, 0, 0) firing every 2 s is used.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::burst::{
    DEFAULT_BURST_COUNT, DEFAULT_BURST_LIFETIME, DEFAULT_BURST_SIZE, DEFAULT_BURST_SPEED,
    DEFAULT_BURST_UPWARD_BIAS,
};
use crate::components::physics::{DEFAULT_FLOOR_Y, DEFAULT_GRAVITY};
use crate::components::rocket::{DEFAULT_FUSE, DEFAULT_LAUNCH_SPEED, DEFAULT_ROCKET_SIZE};
use crate::error::SimError;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./skyburst.ini";
const DEFAULT_SPAWNER_ORIGIN: (f32, f32, f32) = (100.0, 0.0, 0.0);
const DEFAULT_SPAWNER_INTERVAL: f32 = 2.0;
const SPAWNER_SECTION_PREFIX: &str = "spawner.";

/// One `[spawner.*]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerConfig {
    /// Section suffix, e.g. `left` for `[spawner.left]`.
    pub name: String,
    pub origin: (f32, f32, f32),
    pub interval: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            origin: DEFAULT_SPAWNER_ORIGIN,
            interval: DEFAULT_SPAWNER_INTERVAL,
        }
    }
}

/// Simulation configuration resource.
///
/// Values are not validated here; [`SimContext::from_config`] and
/// [`Spawner::new`] reject anything out of range at startup.
///
/// [`SimContext::from_config`]: crate::resources::simcontext::SimContext::from_config
/// [`Spawner::new`]: crate::components::spawner::Spawner::new
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Downward acceleration magnitude.
    pub gravity: f32,
    /// Initial horizontal wind acceleration.
    pub wind_speed: f32,
    /// Ground height below which particles expire.
    pub floor: f32,
    pub launch_speed: f32,
    pub fuse: f32,
    pub rocket_size: f32,
    pub burst_count: usize,
    pub burst_speed_min: f32,
    pub burst_speed_max: f32,
    pub burst_lifetime_min: f32,
    pub burst_lifetime_max: f32,
    pub burst_upward_bias: f32,
    pub burst_size: f32,
    /// Spawners from `[spawner.*]` sections, sorted by name.
    pub spawners: Vec<SpawnerConfig>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            gravity: DEFAULT_GRAVITY,
            wind_speed: 0.0,
            floor: DEFAULT_FLOOR_Y,
            launch_speed: DEFAULT_LAUNCH_SPEED,
            fuse: DEFAULT_FUSE,
            rocket_size: DEFAULT_ROCKET_SIZE,
            burst_count: DEFAULT_BURST_COUNT,
            burst_speed_min: DEFAULT_BURST_SPEED.0,
            burst_speed_max: DEFAULT_BURST_SPEED.1,
            burst_lifetime_min: DEFAULT_BURST_LIFETIME.0,
            burst_lifetime_max: DEFAULT_BURST_LIFETIME.1,
            burst_upward_bias: DEFAULT_BURST_UPWARD_BIAS,
            burst_size: DEFAULT_BURST_SIZE,
            spawners: Vec::new(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Spawners to create: the configured ones, or the single default.
    pub fn spawner_list(&self) -> Vec<SpawnerConfig> {
        if self.spawners.is_empty() {
            vec![SpawnerConfig::default()]
        } else {
            self.spawners.clone()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Values that fail
    /// to parse are skipped with a warning.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), SimError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| SimError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply_ini(&config);

        info!(
            "Loaded config {:?}: {}x{} window, fps={}, gravity={}, wind={}, {} spawner(s)",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.gravity,
            self.wind_speed,
            self.spawner_list().len()
        );

        Ok(())
    }

    /// Load configuration from an in-memory INI string.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), SimError> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| SimError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = get_uint(config, "window", "width") {
            self.window_width = width as u32;
        }
        if let Some(height) = get_uint(config, "window", "height") {
            self.window_height = height as u32;
        }
        if let Some(fps) = get_uint(config, "window", "target_fps") {
            self.target_fps = fps as u32;
        }

        // [physics] section
        if let Some(gravity) = get_float(config, "physics", "gravity") {
            self.gravity = gravity;
        }
        if let Some(wind) = get_float(config, "physics", "wind_speed") {
            self.wind_speed = wind;
        }
        if let Some(floor) = get_float(config, "physics", "floor") {
            self.floor = floor;
        }

        // [rocket] section
        if let Some(speed) = get_float(config, "rocket", "launch_speed") {
            self.launch_speed = speed;
        }
        if let Some(fuse) = get_float(config, "rocket", "fuse") {
            self.fuse = fuse;
        }
        if let Some(size) = get_float(config, "rocket", "size") {
            self.rocket_size = size;
        }

        // [burst] section
        if let Some(count) = get_uint(config, "burst", "count") {
            self.burst_count = count as usize;
        }
        if let Some(v) = get_float(config, "burst", "speed_min") {
            self.burst_speed_min = v;
        }
        if let Some(v) = get_float(config, "burst", "speed_max") {
            self.burst_speed_max = v;
        }
        if let Some(v) = get_float(config, "burst", "lifetime_min") {
            self.burst_lifetime_min = v;
        }
        if let Some(v) = get_float(config, "burst", "lifetime_max") {
            self.burst_lifetime_max = v;
        }
        if let Some(v) = get_float(config, "burst", "upward_bias") {
            self.burst_upward_bias = v;
        }
        if let Some(v) = get_float(config, "burst", "size") {
            self.burst_size = v;
        }

        // [spawner.*] sections
        let mut sections: Vec<String> = config
            .sections()
            .into_iter()
            .filter(|s| s.starts_with(SPAWNER_SECTION_PREFIX))
            .collect();
        if !sections.is_empty() {
            sections.sort();
            self.spawners = sections
                .iter()
                .map(|section| {
                    let defaults = SpawnerConfig::default();
                    SpawnerConfig {
                        name: section[SPAWNER_SECTION_PREFIX.len()..].to_string(),
                        origin: (
                            get_float(config, section, "x").unwrap_or(defaults.origin.0),
                            get_float(config, section, "y").unwrap_or(defaults.origin.1),
                            get_float(config, section, "z").unwrap_or(defaults.origin.2),
                        ),
                        interval: get_float(config, section, "interval")
                            .unwrap_or(defaults.interval),
                    }
                })
                .collect();
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), SimError> {
        let config = self.to_ini();
        config
            .write(&self.config_path)
            .map_err(|e| SimError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set("physics", "wind_speed", Some(self.wind_speed.to_string()));
        config.set("physics", "floor", Some(self.floor.to_string()));

        config.set("rocket", "launch_speed", Some(self.launch_speed.to_string()));
        config.set("rocket", "fuse", Some(self.fuse.to_string()));
        config.set("rocket", "size", Some(self.rocket_size.to_string()));

        config.set("burst", "count", Some(self.burst_count.to_string()));
        config.set("burst", "speed_min", Some(self.burst_speed_min.to_string()));
        config.set("burst", "speed_max", Some(self.burst_speed_max.to_string()));
        config.set("burst", "lifetime_min", Some(self.burst_lifetime_min.to_string()));
        config.set("burst", "lifetime_max", Some(self.burst_lifetime_max.to_string()));
        config.set("burst", "upward_bias", Some(self.burst_upward_bias.to_string()));
        config.set("burst", "size", Some(self.burst_size.to_string()));

        for spawner in &self.spawners {
            let section = format!("{}{}", SPAWNER_SECTION_PREFIX, spawner.name);
            config.set(&section, "x", Some(spawner.origin.0.to_string()));
            config.set(&section, "y", Some(spawner.origin.1.to_string()));
            config.set(&section, "z", Some(spawner.origin.2.to_string()));
            config.set(&section, "interval", Some(spawner.interval.to_string()));
        }

        config
    }
}

fn get_float(config: &Ini, section: &str, key: &str) -> Option<f32> {
    match config.getfloat(section, key) {
        Ok(value) => value.map(|v| v as f32),
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", section, key, e);
            None
        }
    }
}

fn get_uint(config: &Ini, section: &str, key: &str) -> Option<u64> {
    match config.getuint(section, key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", section, key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimConfig::new();
        assert_eq!(c.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(c.burst_count, DEFAULT_BURST_COUNT);
        assert_eq!(c.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
        let spawners = c.spawner_list();
        assert_eq!(spawners.len(), 1);
        assert_eq!(spawners[0].origin, DEFAULT_SPAWNER_ORIGIN);
        assert_eq!(spawners[0].interval, DEFAULT_SPAWNER_INTERVAL);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut c = SimConfig::new();
        c.load_from_str(
            "[physics]\ngravity = 30.5\n\n[burst]\ncount = 12\n\n[window]\nwidth = 800\n",
        )
        .unwrap();
        assert_eq!(c.gravity, 30.5);
        assert_eq!(c.burst_count, 12);
        assert_eq!(c.window_width, 800);
        assert_eq!(c.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(c.fuse, DEFAULT_FUSE);
    }

    #[test]
    fn test_spawner_sections_sorted_by_name() {
        let mut c = SimConfig::new();
        c.load_from_str(
            "[spawner.right]\nx = 80\ninterval = 3\n\n[spawner.left]\nx = -80\nz = 5\n",
        )
        .unwrap();
        assert_eq!(c.spawners.len(), 2);
        assert_eq!(c.spawners[0].name, "left");
        assert_eq!(c.spawners[0].origin, (-80.0, 0.0, 5.0));
        assert_eq!(c.spawners[0].interval, DEFAULT_SPAWNER_INTERVAL);
        assert_eq!(c.spawners[1].name, "right");
        assert_eq!(c.spawners[1].interval, 3.0);
    }

    #[test]
    fn test_unparsable_value_keeps_default() {
        let mut c = SimConfig::new();
        c.load_from_str("[rocket]\nfuse = soon\n").unwrap();
        assert_eq!(c.fuse, DEFAULT_FUSE);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut c = SimConfig::with_path("./definitely/not/here.ini");
        assert!(matches!(c.load_from_file(), Err(SimError::Config(_))));
    }

    #[test]
    fn test_ini_round_trip_through_writer() {
        let mut c = SimConfig::new();
        c.wind_speed = -12.5;
        c.spawners.push(SpawnerConfig {
            name: "mid".to_string(),
            origin: (0.0, 0.0, 10.0),
            interval: 1.5,
        });
        let text = c.to_ini().writes();
        let mut back = SimConfig::new();
        back.load_from_str(&text).unwrap();
        assert_eq!(back.wind_speed, -12.5);
        assert_eq!(back.spawners, c.spawners);
    }
}
