//! Headless render stand-in.
//!
//! Without a window the render pass still runs: every live entity is handed to
//! a [`CountingSurface`] so draw counts can be logged and checked.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::sprite::{DrawSurface, Sprite};
use crate::resources::framestats::FrameStats;
use crate::resources::registry::Registry;
use crate::resources::simcontext::SimContext;
use crate::resources::worldtime::WorldTime;

/// Counts draw calls and discards the sprites.
#[derive(Debug, Default)]
pub struct CountingSurface {
    pub drawn: usize,
}

impl DrawSurface for CountingSurface {
    fn draw_particle(&mut self, _sprite: &Sprite) {
        self.drawn += 1;
    }
}

/// Render into a [`CountingSurface`] and log a summary once per simulated second.
pub fn headless_render_system(
    registry: Res<Registry>,
    ctx: Res<SimContext>,
    time: Res<WorldTime>,
    mut stats: ResMut<FrameStats>,
) {
    let mut surface = CountingSurface::default();
    registry.render_all(&mut surface);

    stats.frames += 1;
    stats.draws_last_frame = surface.drawn;
    stats.total_draws += surface.drawn as u64;
    stats.peak_live = stats.peak_live.max(registry.len());

    if time.elapsed >= stats.next_log_at {
        let counts = registry.counts();
        info!(
            "t={:.1}s rockets={} particles={} draws={} wind={:.1}",
            time.elapsed,
            counts.rockets,
            counts.particles,
            surface.drawn,
            ctx.wind_speed()
        );
        stats.next_log_at = time.elapsed.floor() + 1.0;
    }
}
