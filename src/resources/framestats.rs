//! Draw-call counters for the headless runner.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub draws_last_frame: usize,
    pub total_draws: u64,
    pub peak_live: usize,
    /// Simulated time at which the next summary line is due.
    pub next_log_at: f32,
}
