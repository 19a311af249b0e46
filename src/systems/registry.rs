//! Registry update system.
//!
//! Runs the per-frame update pass of the [`Registry`]: physics, fuse and
//! lifetime countdown, bursts, and pruning of expired entities.

use bevy_ecs::prelude::*;

use crate::resources::registry::Registry;
use crate::resources::simcontext::SimContext;
use crate::resources::worldtime::WorldTime;

/// Update every registry entity once with the scaled frame delta.
///
/// A paused frame (zero delta) skips the pass entirely so nothing ages.
pub fn registry_update_system(
    time: Res<WorldTime>,
    mut ctx: ResMut<SimContext>,
    mut registry: ResMut<Registry>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    registry.update_all(dt, &mut ctx);
}
