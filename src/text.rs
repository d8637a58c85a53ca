use ab_glyph::{Font, FontArc, ScaleFont};
use egui::{Color32, Pos2};

use crate::error::SketchError;
use crate::surface::Surface;

/// Fixed pixel size used when stamping text onto the surface.
pub const STAMP_TEXT_SIZE: f32 = 48.0;

/// Thin line width applied for the duration of a stamp, then restored.
pub const STAMP_LINE_WIDTH: f32 = 1.0;

/// Rasterizes a line of text onto the surface with ab_glyph.
///
/// The font is discovered from well-known system locations once at startup.
/// When none is found, stamping reports `FontUnavailable` and the surface is
/// left untouched.
pub struct TextStamper {
    font: Option<FontArc>,
}

impl Default for TextStamper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStamper {
    pub fn new() -> Self {
        Self {
            font: load_system_font(),
        }
    }

    /// Build a stamper from raw font bytes. Used by tests to avoid depending
    /// on host fonts.
    pub fn from_font_bytes(bytes: Vec<u8>) -> Result<Self, SketchError> {
        let font = FontArc::try_from_vec(bytes).map_err(|_| SketchError::FontUnavailable)?;
        Ok(Self { font: Some(font) })
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Draw `text` with its baseline starting at `pos`, colored `color`.
    /// Kerning and horizontal advances follow the font metrics.
    pub fn stamp(
        &self,
        surface: &mut Surface,
        text: &str,
        pos: Pos2,
        color: Color32,
        px_size: f32,
    ) -> Result<(), SketchError> {
        let font = self.font.as_ref().ok_or(SketchError::FontUnavailable)?;
        let scaled = font.as_scaled(px_size);

        let mut cursor = pos.x;
        let baseline = pos.y;
        let mut prev: Option<ab_glyph::GlyphId> = None;

        for ch in text.chars() {
            let gid = font.glyph_id(ch);
            if let Some(prev) = prev {
                cursor += scaled.kern(prev, gid);
            }
            let glyph = gid.with_scale_and_position(px_size, ab_glyph::point(cursor, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    if coverage > 0.0 {
                        let x = bounds.min.x + gx as f32;
                        let y = bounds.min.y + gy as f32;
                        surface.blend_pixel(x, y, color, coverage);
                    }
                });
            }
            cursor += scaled.h_advance(gid);
            prev = Some(gid);
        }
        Ok(())
    }
}

/// Look for a sans-serif font in the usual places. Checked in order; the first
/// file ab_glyph accepts wins.
fn load_system_font() -> Option<FontArc> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/ubuntu/Ubuntu-R.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    for path in CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            if let Ok(font) = FontArc::try_from_vec(bytes) {
                log::info!("loaded stamp font from {path}");
                return Some(font);
            }
        }
    }
    log::warn!("no usable system font found; text stamping is disabled");
    None
}
