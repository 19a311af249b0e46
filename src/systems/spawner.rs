//! Spawner system.
//!
//! Drives every [`Spawner`] component once per frame. Rockets it launches go
//! straight into the [`Registry`] and are first updated by the registry pass
//! of the same frame.

use bevy_ecs::prelude::*;

use crate::components::spawner::Spawner;
use crate::resources::registry::Registry;
use crate::resources::simcontext::SimContext;
use crate::resources::worldtime::WorldTime;

/// Tick all spawners with the scaled frame delta.
///
/// # Ordering
///
/// Must run **before** `registry_update_system`.
pub fn spawner_system(
    mut spawners: Query<&mut Spawner>,
    time: Res<WorldTime>,
    mut ctx: ResMut<SimContext>,
    mut registry: ResMut<Registry>,
) {
    let dt = time.delta; // delta is already scaled
    if dt <= 0.0 {
        return;
    }
    for mut spawner in spawners.iter_mut() {
        spawner.update(dt, &mut ctx, &mut registry);
    }
}
