//! Frame tick integration tests for spawners, rockets, bursts, and the registry.
//!
//! Each test drives the same systems the binary schedules, through a bevy
//! `Schedule`, with `update_world_time` feeding the frame delta.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector3};

use skyburst::components::firework::Firework;
use skyburst::components::particle::Particle;
use skyburst::components::physics::Atmosphere;
use skyburst::components::rocket::{Rocket, RocketConfig};
use skyburst::components::spawner::Spawner;
use skyburst::components::sprite::Sprite;
use skyburst::components::theme::ThemeId;
use skyburst::game::{self, Overrides};
use skyburst::resources::framestats::FrameStats;
use skyburst::resources::registry::Registry;
use skyburst::resources::simconfig::SimConfig;
use skyburst::resources::simcontext::SimContext;
use skyburst::resources::worldtime::WorldTime;
use skyburst::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// World with a calm atmosphere, a seeded context, and no spawners.
fn make_world() -> World {
    let mut ctx = SimContext::with_seed(1234);
    ctx.atmosphere = Atmosphere::calm();
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ctx);
    world.insert_resource(Registry::new());
    world.insert_resource(FrameStats::default());
    world
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

fn particle_at(y: f32, lifetime: f32) -> Particle {
    Particle::new(
        Vector3::new(0.0, y, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        lifetime,
        2.0,
        ThemeId(0),
        Color::WHITE,
    )
    .unwrap()
}

#[test]
fn spawner_fires_once_per_interval() {
    let mut world = make_world();
    world.spawn(Spawner::new(Vector3::new(0.0, 0.0, 0.0), 2.0).unwrap());
    // Keep rockets alive for the whole test so the count equals the launches.
    world.resource_mut::<SimContext>().rocket = RocketConfig::new(10.0, 100.0, 1.0).unwrap();
    let mut schedule = game::simulation_schedule();

    let mut launches_at = Vec::new();
    let mut previous = 0;
    for step in 1..=12 {
        tick(&mut world, &mut schedule, 0.5);
        let rockets = world.resource::<Registry>().counts().rockets;
        if rockets > previous {
            launches_at.push(step as f32 * 0.5);
            previous = rockets;
        }
    }
    assert_eq!(launches_at, vec![2.0, 4.0, 6.0]);
}

#[test]
fn spawner_large_delta_spawns_exactly_one_rocket() {
    let mut world = make_world();
    world.spawn(Spawner::new(Vector3::new(0.0, 0.0, 0.0), 2.0).unwrap());
    world.resource_mut::<SimContext>().rocket = RocketConfig::new(10.0, 100.0, 1.0).unwrap();
    let mut schedule = game::simulation_schedule();

    tick(&mut world, &mut schedule, 5.0);
    assert_eq!(world.resource::<Registry>().counts().rockets, 1);

    let mut q = world.query::<&Spawner>();
    let spawner = q.single(&world).unwrap();
    assert_eq!(spawner.launched(), 1);
    assert!(approx_eq(spawner.time_since_last(), 0.0));
}

#[test]
fn rocket_launched_and_burst_in_one_frame_is_pruned() {
    let mut world = make_world();
    world.spawn(Spawner::new(Vector3::new(0.0, 0.0, 0.0), 1.0).unwrap());
    world.resource_mut::<SimContext>().rocket = RocketConfig::new(10.0, 0.5, 1.0).unwrap();
    let count = world.resource::<SimContext>().burst.count();
    let mut schedule = game::simulation_schedule();

    tick(&mut world, &mut schedule, 1.0);

    let registry = world.resource::<Registry>();
    assert_eq!(registry.counts().rockets, 0);
    assert_eq!(registry.counts().particles, count);
    assert_eq!(registry.last_report().expired, 1);
    assert_eq!(registry.last_report().bursts, 1);
    assert_eq!(registry.total_inserted(), 1 + count as u64);
    for entity in registry.iter() {
        assert!(!entity.is_expired());
        assert!(approx_eq(entity.position().y, 10.0));
    }
}

#[test]
fn rocket_bursts_into_configured_count_at_its_position() {
    let mut world = make_world();
    let count = world.resource::<SimContext>().burst.count();
    let rocket = Rocket::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 80.0, 0.0),
        1.0,
        2.0,
        ThemeId(2),
        Color::GREEN,
    )
    .unwrap();
    world.resource_mut::<Registry>().insert(rocket);
    let mut schedule = game::simulation_schedule();

    tick(&mut world, &mut schedule, 1.0);

    let registry = world.resource::<Registry>();
    assert_eq!(registry.counts().rockets, 0);
    assert_eq!(registry.counts().particles, count);
    for entity in registry.iter() {
        let Firework::Particle(p) = entity else {
            panic!("rocket should have been pruned");
        };
        assert!(approx_eq(p.position().y, 80.0));
        assert_eq!(p.theme(), ThemeId(2));
    }
}

#[test]
fn rocket_does_not_burst_before_fuse() {
    let mut world = make_world();
    let rocket = Rocket::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 80.0, 0.0),
        1.0,
        2.0,
        ThemeId(0),
        Color::WHITE,
    )
    .unwrap();
    world.resource_mut::<Registry>().insert(rocket);
    let mut schedule = game::simulation_schedule();

    for _ in 0..3 {
        tick(&mut world, &mut schedule, 0.25);
    }
    let registry = world.resource::<Registry>();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.counts().rockets, 1);

    tick(&mut world, &mut schedule, 0.25);
    assert_eq!(world.resource::<Registry>().counts().rockets, 0);
    assert_eq!(world.resource::<Registry>().last_report().bursts, 1);
}

#[test]
fn registry_size_tracks_expiry_without_spawners() {
    let mut world = make_world();
    {
        let mut registry = world.resource_mut::<Registry>();
        for lifetime in [0.5, 1.0, 1.5, 2.0, 2.5] {
            registry.insert(particle_at(10.0, lifetime));
        }
    }
    let mut schedule = game::simulation_schedule();

    let mut expired_so_far = 0;
    for _ in 0..6 {
        tick(&mut world, &mut schedule, 0.5);
        let registry = world.resource::<Registry>();
        expired_so_far += registry.last_report().expired;
        assert_eq!(registry.len(), 5 - expired_so_far);
    }
    assert!(world.resource::<Registry>().is_empty());
}

#[test]
fn particle_overshooting_lifetime_is_pruned_same_frame() {
    let mut world = make_world();
    world.resource_mut::<Registry>().insert(particle_at(10.0, 2.0));
    let mut schedule = game::simulation_schedule();

    tick(&mut world, &mut schedule, 2.1);
    assert!(world.resource::<Registry>().is_empty());
}

#[test]
fn particles_below_floor_are_pruned() {
    let mut world = make_world();
    world.resource_mut::<SimContext>().atmosphere = Atmosphere {
        gravity: 100.0,
        wind_speed: 0.0,
        floor_y: 0.0,
    };
    world.resource_mut::<Registry>().insert(particle_at(1.0, 10.0));
    let mut schedule = game::simulation_schedule();

    tick(&mut world, &mut schedule, 0.5);
    assert!(world.resource::<Registry>().is_empty());
}

#[test]
fn wind_is_read_from_the_context_each_frame() {
    let mut world = make_world();
    world.resource_mut::<Registry>().insert(particle_at(10.0, 10.0));
    let mut schedule = game::simulation_schedule();

    tick(&mut world, &mut schedule, 1.0);
    world.resource_mut::<SimContext>().set_wind_speed(6.0);
    tick(&mut world, &mut schedule, 1.0);

    let registry = world.resource::<Registry>();
    let Some(Firework::Particle(p)) = registry.iter().next() else {
        panic!("particle should still be alive");
    };
    assert!(approx_eq(p.velocity().x, 6.0));
    assert!(approx_eq(p.position().x, 6.0));
}

#[test]
fn paused_frames_do_not_advance_anything() {
    let mut world = make_world();
    world.spawn(Spawner::new(Vector3::new(0.0, 0.0, 0.0), 0.5).unwrap());
    world.resource_mut::<Registry>().insert(particle_at(10.0, 1.0));
    world.insert_resource(WorldTime::default().with_time_scale(0.0));
    let mut schedule = game::simulation_schedule();

    for _ in 0..10 {
        tick(&mut world, &mut schedule, 0.5);
    }
    let registry = world.resource::<Registry>();
    assert_eq!(registry.len(), 1);
    let Some(Firework::Particle(p)) = registry.iter().next() else {
        panic!("particle should still be alive");
    };
    assert_eq!(p.age(), 0.0);
}

#[test]
fn render_all_twice_produces_identical_draws() {
    let mut world = game::build_world(
        SimConfig::new(),
        Overrides {
            seed: Some(7),
            wind_speed: None,
        },
    )
    .unwrap();
    let mut schedule = game::simulation_schedule();
    for _ in 0..240 {
        tick(&mut world, &mut schedule, 1.0 / 60.0);
    }

    let registry = world.resource::<Registry>();
    assert!(!registry.is_empty());
    let mut first: Vec<Sprite> = Vec::new();
    let mut second: Vec<Sprite> = Vec::new();
    registry.render_all(&mut first);
    registry.render_all(&mut second);
    assert_eq!(first.len(), registry.len());
    assert_eq!(first, second);
}

#[test]
fn headless_schedule_counts_draws() {
    let mut world = game::build_world(
        SimConfig::new(),
        Overrides {
            seed: Some(3),
            wind_speed: Some(5.0),
        },
    )
    .unwrap();
    let mut schedule = game::headless_schedule();
    for _ in 0..300 {
        tick(&mut world, &mut schedule, 1.0 / 60.0);
    }

    let stats = *world.resource::<FrameStats>();
    let live = world.resource::<Registry>().len();
    assert_eq!(stats.frames, 300);
    assert_eq!(stats.draws_last_frame, live);
    assert!(stats.total_draws > 0);
    assert!(stats.peak_live >= live);
}

#[test]
fn seeded_worlds_evolve_identically() {
    let run = || {
        let mut world = game::build_world(
            SimConfig::new(),
            Overrides {
                seed: Some(99),
                wind_speed: Some(-3.0),
            },
        )
        .unwrap();
        let mut schedule = game::simulation_schedule();
        for _ in 0..200 {
            tick(&mut world, &mut schedule, 1.0 / 60.0);
        }
        let mut sprites: Vec<Sprite> = Vec::new();
        world.resource::<Registry>().render_all(&mut sprites);
        sprites
    };
    assert_eq!(run(), run());
}
