//! Skyburst main entry point.
//!
//! A fireworks demo written in Rust using:
//! - **raylib** for windowing, 3D drawing, and keyboard input
//! - **bevy_ecs** for resources, spawner entities, and the frame schedule
//!
//! # Main Loop
//!
//! 1. Load `skyburst.ini` (or `--config`), build the ECS world
//! 2. Open the raylib window, generate one glow texture per palette theme
//! 3. Each frame: read input, tick spawners, update the registry, render
//!
//! With `--headless N` no window is opened: the simulation runs N fixed
//! 1/60 s frames and logs a summary once per simulated second.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! RUST_LOG=debug cargo run -- --headless 600 --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use skyburst::error::SimError;
use skyburst::events::switchdebug::switch_debug_observer;
use skyburst::game::{self, Overrides};
use skyburst::resources::camera3d::Camera3DRes;
use skyburst::resources::framestats::FrameStats;
use skyburst::resources::input::InputState;
use skyburst::resources::registry::Registry;
use skyburst::resources::simconfig::SimConfig;
use skyburst::resources::simcontext::SimContext;
use skyburst::resources::texturestore::TextureStore;
use skyburst::systems::input::{scene_control_system, update_input_state, wind_control_system};
use skyburst::systems::registry::registry_update_system;
use skyburst::systems::render::render_system;
use skyburst::systems::spawner::spawner_system;
use skyburst::systems::time::update_world_time;

const HEADLESS_DT: f32 = 1.0 / 60.0;

/// Skyburst fireworks
#[derive(Parser)]
#[command(version, about = "Rockets, bursts, and wind. A real-time particle demo.")]
struct Cli {
    /// INI configuration file (default: ./skyburst.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the random generator, for reproducible bursts.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial wind speed, overriding the configuration.
    #[arg(long, allow_hyphen_values = true)]
    wind: Option<f32>,

    /// Run this many frames without a window and exit.
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::with_path(path),
        None => SimConfig::new(),
    };
    match config.load_from_file() {
        Ok(()) => {}
        // An explicitly requested file must exist; the default one is optional.
        Err(e) if cli.config.is_some() => return Err(e),
        Err(e) => info!("{e}; using defaults"),
    }

    let overrides = Overrides {
        seed: cli.seed,
        wind_speed: cli.wind,
    };
    let world = game::build_world(config, overrides)?;

    match cli.headless {
        Some(frames) => run_headless(world, frames),
        None => run_windowed(world),
    }
}

fn run_headless(mut world: World, frames: u64) -> Result<(), SimError> {
    info!("Running {} headless frames", frames);
    let mut schedule = game::headless_schedule();
    for _ in 0..frames {
        update_world_time(&mut world, HEADLESS_DT);
        schedule.run(&mut world);
    }

    let stats = *world.resource::<FrameStats>();
    let registry = world.resource::<Registry>();
    info!(
        "Done: {} frames, {} draws, peak {} live, {} inserted, {} expired, {} live at exit",
        stats.frames,
        stats.total_draws,
        stats.peak_live,
        registry.total_inserted(),
        registry.total_expired(),
        registry.len()
    );
    Ok(())
}

fn run_windowed(mut world: World) -> Result<(), SimError> {
    let (window_width, window_height, target_fps) = {
        let config = world.resource::<SimConfig>();
        (config.window_width, config.window_height, config.target_fps)
    };

    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Skyburst")
        .build();
    rl.set_target_fps(target_fps);

    let textures =
        TextureStore::from_palette(&mut rl, &thread, &world.resource::<SimContext>().palette)?;
    info!("Generated {} theme textures", textures.map.len());

    world.insert_resource(Camera3DRes::default());
    world.insert_resource(InputState::default());
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observer is registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            wind_control_system,
            scene_control_system,
            spawner_system,
            registry_update_system,
            render_system,
        )
            .chain(),
    );

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }

    // Textures must go before the window closes.
    world.remove_non_send_resource::<TextureStore>();
    info!(
        "Shutting down with {} live entities",
        world.resource::<Registry>().len()
    );
    Ok(())
}
