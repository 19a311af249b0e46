//! Debug toggle resource.
//!
//! The mere presence of this resource turns on the overlay with frame rate,
//! wind speed, and registry counts. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
