//! World setup and frame schedules.
//!
//! [`build_world`] inserts every simulation resource and spawns one entity per
//! configured spawner. The window-specific resources (raylib handle, textures,
//! camera, input) are added by the binary on top of this.
//!
//! A frame is always: spawners, then the registry update pass, then render.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector3;

use crate::components::spawner::Spawner;
use crate::error::SimError;
use crate::resources::framestats::FrameStats;
use crate::resources::registry::Registry;
use crate::resources::simconfig::SimConfig;
use crate::resources::simcontext::SimContext;
use crate::resources::worldtime::WorldTime;
use crate::systems::registry::registry_update_system;
use crate::systems::spawner::spawner_system;
use crate::systems::stats::headless_render_system;

/// Runtime overrides coming from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub wind_speed: Option<f32>,
}

/// Build one [`Spawner`] per configured spawner section.
pub fn spawners_from_config(config: &SimConfig) -> Result<Vec<Spawner>, SimError> {
    config
        .spawner_list()
        .iter()
        .map(|s| {
            let (x, y, z) = s.origin;
            Spawner::new(Vector3::new(x, y, z), s.interval)
        })
        .collect()
}

/// Create the ECS world with all simulation resources and spawners.
pub fn build_world(config: SimConfig, overrides: Overrides) -> Result<World, SimError> {
    let mut ctx = SimContext::from_config(&config, overrides.seed)?;
    if let Some(wind) = overrides.wind_speed {
        ctx.set_wind_speed(wind);
    }
    let spawners = spawners_from_config(&config)?;

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ctx);
    world.insert_resource(Registry::new());
    world.insert_resource(FrameStats::default());

    for spawner in spawners {
        let origin = spawner.origin();
        info!(
            "Spawner at ({:.1}, {:.1}, {:.1}) every {:.2}s",
            origin.x,
            origin.y,
            origin.z,
            spawner.interval()
        );
        world.spawn(spawner);
    }
    world.insert_resource(config);
    Ok(world)
}

/// Spawner pass followed by the registry pass.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((spawner_system, registry_update_system).chain());
    schedule
}

/// Simulation plus the counting render pass, for running without a window.
pub fn headless_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            spawner_system,
            registry_update_system,
            headless_render_system,
        )
            .chain(),
    );
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::simconfig::SpawnerConfig;

    #[test]
    fn test_build_world_with_defaults() {
        let mut world = build_world(SimConfig::new(), Overrides::default()).unwrap();
        assert!(world.contains_resource::<Registry>());
        assert!(world.contains_resource::<SimContext>());
        let count = world.query::<&Spawner>().iter(&world).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_wind_override_applies() {
        let overrides = Overrides {
            seed: Some(1),
            wind_speed: Some(-7.5),
        };
        let world = build_world(SimConfig::new(), overrides).unwrap();
        assert_eq!(world.resource::<SimContext>().wind_speed(), -7.5);
    }

    #[test]
    fn test_invalid_spawner_interval_rejected() {
        let mut config = SimConfig::new();
        config.spawners.push(SpawnerConfig {
            name: "broken".to_string(),
            origin: (0.0, 0.0, 0.0),
            interval: 0.0,
        });
        assert!(matches!(
            build_world(config, Overrides::default()),
            Err(SimError::NonPositive { .. })
        ));
    }
}
