//! Per-frame keyboard input resource.
//!
//! Captures the handful of keys the demo reacts to and exposes them to
//! systems via the [`InputState`] resource. Arrow keys steer the wind, `R`
//! resets it, Space pauses and F11 toggles the debug overlay. `C` clears the
//! sky and F5 writes the current settings back to the config file.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to the demo.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub wind_left: BoolState,
    pub wind_right: BoolState,
    pub wind_reset: BoolState,
    pub pause: BoolState,
    pub mode_debug: BoolState,
    pub clear_scene: BoolState,
    pub save_config: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            wind_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            wind_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            wind_reset: BoolState::bound_to(KeyboardKey::KEY_R),
            pause: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            clear_scene: BoolState::bound_to(KeyboardKey::KEY_C),
            save_config: BoolState::bound_to(KeyboardKey::KEY_F5),
        }
    }
}
