//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation, handle
//! input, and draw.
//!
//! Submodules overview
//! - [`input`] – read hardware input, steer wind, pause
//! - [`registry`] – per-frame registry update pass
//! - [`render`] – draw the ground, billboards, and debug overlay using Raylib
//! - [`spawner`] – tick spawners and launch rockets
//! - [`stats`] – counting render pass for headless runs
//! - [`time`] – update simulation time and delta

pub mod input;
pub mod registry;
pub mod render;
pub mod spawner;
pub mod stats;
pub mod time;
