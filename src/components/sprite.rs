//! Per-entity draw record and the draw surface it is handed to.
//!
//! Simulation entities never talk to the renderer directly. During the render
//! pass each live entity builds a [`Sprite`] and passes it to a
//! [`DrawSurface`]; the windowed host draws billboards, the headless host only
//! counts them, and tests record them.

use raylib::prelude::{Color, Vector3};

use crate::components::theme::ThemeId;

/// One draw call: where, how big, which theme texture, which tint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    /// World-space center.
    pub position: Vector3,
    /// Billboard edge length in world units.
    pub size: f32,
    /// Texture slot to draw with.
    pub theme: ThemeId,
    /// Color modulation, including the fade alpha.
    pub tint: Color,
}

/// Draw callback invoked once per live entity per frame.
pub trait DrawSurface {
    fn draw_particle(&mut self, sprite: &Sprite);
}

/// Collects every sprite it is given. Handy for tests and diagnostics.
impl DrawSurface for Vec<Sprite> {
    fn draw_particle(&mut self, sprite: &Sprite) {
        self.push(*sprite);
    }
}
