//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`wind_control_system`] turns that state into wind and pause changes.
//! - [`scene_control_system`] clears the registry and saves the config.
use bevy_ecs::prelude::*;
use log::{error, info};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};
use crate::resources::registry::Registry;
use crate::resources::simconfig::SimConfig;
use crate::resources::simcontext::SimContext;
use crate::resources::worldtime::WorldTime;

/// Wind change per key press, in world units per second squared.
pub const WIND_STEP: f32 = 20.0;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    };
    poll(&mut input.wind_left);
    poll(&mut input.wind_right);
    poll(&mut input.wind_reset);
    poll(&mut input.pause);
    poll(&mut input.mode_debug);
    poll(&mut input.clear_scene);
    poll(&mut input.save_config);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

/// Apply wind and pause keys.
pub fn wind_control_system(
    input: Res<InputState>,
    mut ctx: ResMut<SimContext>,
    mut time: ResMut<WorldTime>,
) {
    if input.wind_left.just_pressed {
        let wind = ctx.adjust_wind(-WIND_STEP);
        info!("Wind speed: {:.1}", wind);
    }
    if input.wind_right.just_pressed {
        let wind = ctx.adjust_wind(WIND_STEP);
        info!("Wind speed: {:.1}", wind);
    }
    if input.wind_reset.just_pressed {
        ctx.set_wind_speed(0.0);
        info!("Wind speed reset");
    }
    if input.pause.just_pressed {
        time.toggle_pause();
        info!("{}", if time.is_paused() { "Paused" } else { "Resumed" });
    }
}

/// Clear the sky on `C`, write the config file on F5.
///
/// The saved wind is the live value, so a tuned breeze survives a restart.
pub fn scene_control_system(
    input: Res<InputState>,
    ctx: Res<SimContext>,
    mut config: ResMut<SimConfig>,
    mut registry: ResMut<Registry>,
) {
    if input.clear_scene.just_pressed {
        let live = registry.len();
        registry.clear();
        info!("Cleared {} live entities", live);
    }
    if input.save_config.just_pressed {
        config.wind_speed = ctx.wind_speed();
        if let Err(e) = config.save_to_file() {
            error!("{e}");
        }
    }
}
