//! Simulation clock resource.
//!
//! `delta` is the already-scaled step for the current frame; every system that
//! advances the simulation reads it instead of querying the window. A
//! `time_scale` of zero pauses the simulation without stopping rendering.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }

    /// Flip between paused and normal speed.
    pub fn toggle_pause(&mut self) {
        self.time_scale = if self.is_paused() { 1.0 } else { 0.0 };
    }
}
