//! Trophy emblem drawn on top of the gradient background.
//!
//! Font candidates are tried in order and the first one that loads and can
//! render the trophy glyph wins. When none can, the vector trophy from
//! [`crate::trophy`] is drawn instead.

use crate::trophy::{self, GOLD};
use anyhow::{bail, Context, Result};
use image::RgbaImage;
use imageproc::drawing::draw_text_mut;
use log::{debug, info};
use rusttype::{point, Font, Rect, Scale};
use std::{fmt, path::Path};

/// U+1F3C6 TROPHY
pub const TROPHY: char = '\u{1F3C6}';

/// Offset from the icon center used when the glyph can't be measured.
const UNMEASURED_OFFSET: i32 = 30;

/// A system font that may be able to render the trophy glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontCandidate {
    pub name: &'static str,
    pub path: &'static str,
    /// Only probed when running on macOS.
    pub macos_only: bool,
}

/// Fonts probed for the trophy glyph, in priority order.
pub const FONT_CANDIDATES: [FontCandidate; 2] = [
    FontCandidate {
        name: "Apple Color Emoji",
        path: "/System/Library/Fonts/Apple Color Emoji.ttc",
        macos_only: true,
    },
    FontCandidate {
        name: "Helvetica",
        path: "/System/Library/Fonts/Helvetica.ttc",
        macos_only: false,
    },
];

impl FontCandidate {
    fn applies_to_this_platform(&self) -> bool {
        !self.macos_only || cfg!(target_os = "macos")
    }

    /// Load the font and check that it has an outline for `glyph`.
    pub fn load(&self, glyph: char) -> Result<Font<'static>> {
        load_glyph_font(Path::new(self.path), glyph)
            .with_context(|| format!("Can't use font {}", self.name))
    }
}

/// Load a font that can rasterize `glyph`.
///
/// A font that parses but lacks an outline for `glyph` is rejected, so the
/// caller falls through to the vector trophy instead of a missing-glyph box.
fn load_glyph_font(path: &Path, glyph: char) -> Result<Font<'static>> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read font file {}", path.display()))?;
    let font = Font::try_from_vec(data)
        .with_context(|| format!("{} is not a supported font", path.display()))?;

    let outline = font.glyph(glyph);
    if outline.id().0 == 0 {
        bail!("{} has no glyph for {}", path.display(), glyph);
    }
    // Bitmap-only glyphs (color emoji) carry no outline to rasterize.
    if outline.scaled(Scale::uniform(1.0)).exact_bounding_box().is_none() {
        bail!("{} has no outline for {}", path.display(), glyph);
    }

    Ok(font)
}

/// How the emblem ended up being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmblemStyle {
    Glyph { font: &'static str },
    Procedural,
}

/// Draws the trophy emblem, falling back from fonts to vector shapes.
///
/// The font is resolved once when the renderer is built and reused for
/// every icon.
#[derive(Clone)]
pub struct EmblemRenderer {
    glyph: char,
    font: Option<(&'static str, Font<'static>)>,
}

impl fmt::Debug for EmblemRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmblemRenderer")
            .field("glyph", &self.glyph)
            .field("style", &self.style())
            .finish()
    }
}

impl EmblemRenderer {
    /// Use the first candidate able to render the trophy.
    pub fn from_candidates(candidates: &[FontCandidate]) -> Self {
        Self::for_glyph(TROPHY, candidates)
    }

    /// Use the first candidate able to render `glyph`, tried in order.
    pub fn for_glyph(glyph: char, candidates: &[FontCandidate]) -> Self {
        let font = candidates
            .iter()
            .filter(|candidate| candidate.applies_to_this_platform())
            .find_map(|candidate| match candidate.load(glyph) {
                Ok(font) => Some((candidate.name, font)),
                Err(err) => {
                    debug!("{err:#}");
                    None
                }
            });

        match &font {
            Some((name, _)) => info!("Drawing the emblem with font {name}"),
            None => info!("No font can render {glyph}, drawing the vector trophy"),
        }

        Self { glyph, font }
    }

    /// Probe the platform's system fonts.
    pub fn system() -> Self {
        Self::from_candidates(&FONT_CANDIDATES)
    }

    /// Never use a font; always draw the vector trophy.
    pub fn procedural() -> Self {
        Self {
            glyph: TROPHY,
            font: None,
        }
    }

    pub fn style(&self) -> EmblemStyle {
        match &self.font {
            Some((name, _)) => EmblemStyle::Glyph { font: *name },
            None => EmblemStyle::Procedural,
        }
    }

    /// Draw the emblem centered on a square canvas of `size` pixels.
    pub fn draw(&self, canvas: &mut RgbaImage, size: u32) -> EmblemStyle {
        match &self.font {
            Some((_, font)) => {
                draw_glyph(canvas, font, self.glyph, size);
            }
            None => trophy::draw_trophy(canvas, size),
        }
        self.style()
    }
}

/// Font size used for a given icon size: 60% of the icon.
pub fn font_size_for(size: u32) -> f32 {
    ((size as f32 * 0.6) as u32).max(1) as f32
}

/// Draw `glyph` in gold, centered on its measured bounds, and return the
/// text origin used.
pub fn draw_glyph(
    canvas: &mut RgbaImage,
    font: &Font<'static>,
    glyph: char,
    size: u32,
) -> (i32, i32) {
    let scale = Scale::uniform(font_size_for(size));
    let text = glyph.to_string();

    let bounds = measure_text(font, scale, &text);
    if bounds.is_none() {
        debug!("Can't measure {glyph}, drawing it at a fixed offset");
    }
    let (x, y) = glyph_origin(bounds, size);

    draw_text_mut(canvas, GOLD, x, y, scale, font, &text);
    (x, y)
}

/// Text origin that centers `bounds` on the canvas, or a fixed offset from
/// the center when there is nothing to measure.
///
/// Centering subtracts both minimum coordinates, so side bearings don't
/// shift the glyph horizontally.
pub fn glyph_origin(bounds: Option<Rect<i32>>, size: u32) -> (i32, i32) {
    let size = size as i32;
    match bounds {
        Some(bounds) => {
            let text_width = bounds.max.x - bounds.min.x;
            let text_height = bounds.max.y - bounds.min.y;
            (
                (size - text_width).div_euclid(2) - bounds.min.x,
                (size - text_height).div_euclid(2) - bounds.min.y,
            )
        }
        None => (size / 2 - UNMEASURED_OFFSET, size / 2 - UNMEASURED_OFFSET),
    }
}

/// Pixel bounds of `text` laid out the way `draw_text_mut` places it:
/// origin at the top-left, baseline one ascent below.
fn measure_text(font: &Font<'_>, scale: Scale, text: &str) -> Option<Rect<i32>> {
    let ascent = font.v_metrics(scale).ascent;

    font.layout(text, scale, point(0.0, ascent))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .reduce(|acc, bb| Rect {
            min: point(acc.min.x.min(bb.min.x), acc.min.y.min(bb.min.y)),
            max: point(acc.max.x.max(bb.max.x), acc.max.y.max(bb.max.y)),
        })
}
