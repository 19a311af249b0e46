//! Shared 3D camera resource.
//!
//! Wraps raylib's [`Camera3D`] so the render system and billboard drawing
//! agree on one view.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// ECS resource that holds the active 3D camera parameters.
#[derive(Resource)]
pub struct Camera3DRes(pub Camera3D);

impl Default for Camera3DRes {
    /// Looking down at the launch field from above and in front.
    fn default() -> Self {
        Self(Camera3D::perspective(
            Vector3::new(0.0, 600.0, 600.0),
            Vector3::new(0.0, 150.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            45.0,
        ))
    }
}
