//! Theme textures, one per palette slot.
//!
//! Built once at startup after the window exists and read-only afterwards.
//! Each texture is a radial glow from white to the theme tint; the billboard
//! tint then colors and fades it.

use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::theme::{Palette, ThemeId};
use crate::error::SimError;

const GLOW_TEXTURE_SIZE: i32 = 32;

/// Non-send resource: textures hold GPU handles owned by the render thread.
pub struct TextureStore {
    pub map: FxHashMap<ThemeId, Texture2D>,
}

impl TextureStore {
    /// Generate one glow texture for each theme of `palette`.
    pub fn from_palette(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        palette: &Palette,
    ) -> Result<Self, SimError> {
        let mut map = FxHashMap::default();
        for (id, theme) in palette.iter() {
            let outer = Color::new(theme.tint.r, theme.tint.g, theme.tint.b, 0);
            let image = Image::gen_image_gradient_radial(
                GLOW_TEXTURE_SIZE,
                GLOW_TEXTURE_SIZE,
                0.2,
                Color::WHITE,
                outer,
            );
            let texture = rl.load_texture_from_image(th, &image).map_err(|e| {
                SimError::Texture(format!("theme '{}': {}", theme.name, e))
            })?;
            map.insert(id, texture);
        }
        Ok(Self { map })
    }

    pub fn get(&self, id: ThemeId) -> Option<&Texture2D> {
        self.map.get(&id)
    }
}
