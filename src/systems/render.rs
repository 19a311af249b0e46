//! Render system.
//!
//! Draws the ground slab and every registry entity as a camera-facing
//! billboard, then the optional debug overlay. Rendering only reads the
//! registry; it never mutates simulation state.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::sprite::{DrawSurface, Sprite};
use crate::resources::camera3d::Camera3DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::registry::Registry;
use crate::resources::simcontext::SimContext;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

const BACKGROUND: Color = Color {
    r: 70,
    g: 70,
    b: 100,
    a: 255,
};
const GROUND: Color = Color {
    r: 110,
    g: 110,
    b: 120,
    a: 255,
};
const HELP_TEXT: &str = "LEFT/RIGHT wind  R reset wind  SPACE pause  C clear  F5 save  F11 debug";

/// [`DrawSurface`] that turns sprites into raylib billboards.
///
/// Falls back to a small sphere when no texture is loaded for the theme.
pub struct BillboardSurface<'a, D> {
    pub draw: &'a mut D,
    pub camera: Camera3D,
    pub textures: &'a TextureStore,
}

impl<D: RaylibDraw3D> DrawSurface for BillboardSurface<'_, D> {
    fn draw_particle(&mut self, sprite: &Sprite) {
        match self.textures.get(sprite.theme) {
            Some(texture) => self.draw.draw_billboard(
                self.camera,
                texture,
                sprite.position,
                sprite.size,
                sprite.tint,
            ),
            None => self
                .draw
                .draw_sphere(sprite.position, sprite.size * 0.5, sprite.tint),
        }
    }
}

/// Draw one frame.
///
/// # Ordering
///
/// Runs last, after `registry_update_system`.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    camera: Res<Camera3DRes>,
    registry: Res<Registry>,
    ctx: Res<SimContext>,
    time: Res<WorldTime>,
    debug: Option<Res<DebugMode>>,
) {
    let camera = camera.0;
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    {
        let mut d3 = d.begin_mode3D(camera);
        d3.draw_cube(Vector3::new(0.0, -0.5, 0.0), 250.0, 1.0, 150.0, GROUND);
        let mut surface = BillboardSurface {
            draw: &mut d3,
            camera,
            textures: &textures,
        };
        registry.render_all(&mut surface);
    }

    let screen_h = d.get_screen_height();
    d.draw_text(HELP_TEXT, 10, screen_h - 20, 10, Color::RAYWHITE);
    if time.is_paused() {
        d.draw_text("PAUSED", 10, 10, 20, Color::YELLOW);
    }

    if debug.is_some() {
        let counts = registry.counts();
        let report = registry.last_report();
        d.draw_fps(10, 40);
        let lines = [
            format!("Wind: {:.1}", ctx.wind_speed()),
            format!(
                "Live: {} rockets, {} particles",
                counts.rockets, counts.particles
            ),
            format!(
                "Last pass: {} updated, {} expired, {} bursts",
                report.updated, report.expired, report.bursts
            ),
            format!(
                "Totals: {} inserted, {} expired",
                registry.total_inserted(),
                registry.total_expired()
            ),
            format!("Sim time: {:.1}s (frame {})", time.elapsed, time.frame_count),
        ];
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(line, 10, 65 + i as i32 * 14, 10, Color::RAYWHITE);
        }
    }
}
