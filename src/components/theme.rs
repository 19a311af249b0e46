//! Color themes shared by rockets and the particles of their burst.
//!
//! A [`Palette`] is a small fixed table of [`Theme`]s addressed by
//! [`ThemeId`]. Simulation entities only ever carry the id and a copy of the
//! tint; the render host resolves the id to whatever texture it preloaded for
//! that slot.

use fastrand::Rng;
use raylib::prelude::Color;

use crate::error::SimError;

/// Index of a theme inside the [`Palette`]. Opaque to the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId(pub usize);

/// A named color theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub tint: Color,
}

impl Theme {
    /// Create a new theme with the given RGB tint (fully opaque).
    pub fn new(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self {
            name: name.into(),
            tint: Color::new(r, g, b, 255),
        }
    }
}

/// Fixed, non-empty list of themes a burst can be drawn from.
#[derive(Clone, Debug)]
pub struct Palette {
    themes: Vec<Theme>,
}

impl Palette {
    /// Build a palette. Fails if `themes` is empty.
    pub fn new(themes: Vec<Theme>) -> Result<Self, SimError> {
        if themes.is_empty() {
            return Err(SimError::EmptyPalette);
        }
        Ok(Self { themes })
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false: construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn get(&self, id: ThemeId) -> Option<&Theme> {
        self.themes.get(id.0)
    }

    /// Tint for `id`, or white if the id is out of range.
    pub fn tint(&self, id: ThemeId) -> Color {
        self.get(id).map(|t| t.tint).unwrap_or(Color::WHITE)
    }

    /// Iterate `(id, theme)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeId, &Theme)> {
        self.themes.iter().enumerate().map(|(i, t)| (ThemeId(i), t))
    }

    /// Pick a theme uniformly at random.
    pub fn random(&self, rng: &mut Rng) -> ThemeId {
        ThemeId(rng.usize(0..self.themes.len()))
    }
}

impl Default for Palette {
    /// Colors of the usual pyrotechnic salts.
    fn default() -> Self {
        Self {
            themes: vec![
                Theme::new("strontium", 255, 40, 40),
                Theme::new("sodium", 255, 215, 0),
                Theme::new("barium", 40, 255, 110),
                Theme::new("copper", 70, 130, 255),
                Theme::new("potassium", 185, 60, 255),
                Theme::new("titanium", 255, 255, 255),
            ],
        }
    }
}

/// Scale the alpha channel of `color` by `factor` (clamped to `[0, 1]`).
pub fn fade(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    Color::new(
        color.r,
        color.g,
        color.b,
        (color.a as f32 * factor).round() as u8,
    )
}
