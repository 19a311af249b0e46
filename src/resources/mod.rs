//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `camera3d` – shared 3D camera for billboards and the ground
//! - `debugmode` – presence toggles the debug overlay
//! - `framestats` – draw counters for headless runs
//! - `input` – per-frame keyboard state of keys relevant to the demo
//! - `registry` – the single owner of all live rockets and particles
//! - `simconfig` – INI-backed configuration
//! - `simcontext` – wind, gravity, rocket/burst tunables, palette, RNG
//! - `texturestore` – one glow texture per palette theme
//! - `worldtime` – simulation time and delta
pub mod camera3d;
pub mod debugmode;
pub mod framestats;
pub mod input;
pub mod registry;
pub mod simconfig;
pub mod simcontext;
pub mod texturestore;
pub mod worldtime;
