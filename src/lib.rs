//! Skyburst library.
//!
//! Rocket and firework-burst simulation: the entity types, the shared
//! registry that owns them, the spawners that feed it, and the ECS systems
//! and resources that drive one frame. Exposed as a library for the binary
//! and for integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
