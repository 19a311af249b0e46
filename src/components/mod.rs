//! Simulation entity types and the values they are built from.
//!
//! Submodules overview:
//! - [`burst`] – burst parameters and the particle fan-out of a fuse expiry
//! - [`firework`] – tagged variant over the entities the registry owns
//! - [`particle`] – a single aging, falling burst particle
//! - [`physics`] – gravity and wind integration shared by all bodies
//! - [`rocket`] – the flight phase, fuse, and launch parameters
//! - [`spawner`] – fixed-position, fixed-interval rocket launcher (ECS component)
//! - [`sprite`] – per-entity draw record and the draw surface trait
//! - [`theme`] – color palette shared by a rocket and its burst

pub mod burst;
pub mod firework;
pub mod particle;
pub mod physics;
pub mod rocket;
pub mod spawner;
pub mod sprite;
pub mod theme;
