use egui::{Color32, ColorImage, Pos2};
use image::{Rgba, RgbaImage, imageops};

use crate::session::BACKGROUND;

/// Logical size of the drawing surface in pixels. Fixed for the lifetime of
/// the session.
pub const SURFACE_SIZE: u32 = 800;

/// The raster pixel buffer being drawn on.
///
/// All mutations happen on the UI thread. The `dirty` flag tracks whether the
/// pixels changed since the last texture upload so the display texture is only
/// re-uploaded when needed.
pub struct Surface {
    pixels: RgbaImage,
    dirty: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// A fresh surface, cleared to the background color.
    pub fn new() -> Self {
        Self {
            pixels: RgbaImage::from_pixel(SURFACE_SIZE, SURFACE_SIZE, to_rgba(BACKGROUND)),
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Color at `(x, y)`. The surface is always opaque, so alpha is ignored.
    pub fn pixel(&self, x: u32, y: u32) -> Color32 {
        let ch = self.pixels.get_pixel(x, y).0;
        Color32::from_rgb(ch[0], ch[1], ch[2])
    }

    /// True if every pixel equals `color`.
    pub fn is_uniform(&self, color: Color32) -> bool {
        let target = to_rgba(color);
        self.pixels.pixels().all(|p| *p == target)
    }

    /// Consume the dirty flag, returning whether pixels changed since the last
    /// call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Render one stroke segment from `from` to `to` as a dense run of filled
    /// discs, which gives round joins and round caps for free.
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let radius = (width * 0.5).max(0.5);
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < 0.1 {
            self.stamp_disc(from, radius, color);
            return;
        }

        // Sub-pixel stepping keeps fast strokes gap-free.
        let steps = distance.ceil() as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disc(Pos2::new(from.x + dx * t, from.y + dy * t), radius, color);
        }
    }

    fn stamp_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        if center.x + radius < 0.0 || center.y + radius < 0.0 {
            return;
        }
        let rgba = to_rgba(color);
        let min_x = (center.x - radius).floor().max(0.0) as u32;
        let min_y = (center.y - radius).floor().max(0.0) as u32;
        let max_x = ((center.x + radius).ceil() as i64).clamp(0, i64::from(SURFACE_SIZE) - 1) as u32;
        let max_y = ((center.y + radius).ceil() as i64).clamp(0, i64::from(SURFACE_SIZE) - 1) as u32;

        let r_sq = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5 - center.x;
                let py = y as f32 + 0.5 - center.y;
                if px * px + py * py <= r_sq {
                    self.pixels.put_pixel(x, y, rgba);
                }
            }
        }
        self.dirty = true;
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for p in self.pixels.pixels_mut() {
            *p = rgba;
        }
        self.dirty = true;
    }

    /// Reset the surface to the background color, regardless of the current
    /// fill color.
    pub fn clear(&mut self) {
        self.fill(BACKGROUND);
    }

    /// Draw a decoded image stretched to exactly cover the surface, discarding
    /// its aspect ratio. Source alpha is composited over the existing pixels.
    pub fn blit_stretched(&mut self, src: &RgbaImage) {
        let resized = imageops::resize(src, SURFACE_SIZE, SURFACE_SIZE, imageops::FilterType::Triangle);
        for (dst, src) in self.pixels.pixels_mut().zip(resized.pixels()) {
            *dst = blend_over(*dst, *src);
        }
        self.dirty = true;
    }

    /// Blend `color` into the pixel at `(x, y)` with the given coverage, used
    /// by the glyph rasterizer. Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: f32, y: f32, color: Color32, coverage: f32) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= SURFACE_SIZE || y >= SURFACE_SIZE {
            return;
        }
        let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
        let top = Rgba([color.r(), color.g(), color.b(), alpha]);
        let base = *self.pixels.get_pixel(x, y);
        self.pixels.put_pixel(x, y, blend_over(base, top));
        self.dirty = true;
    }

    /// Copy of the pixels in the format egui textures want.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [SURFACE_SIZE as usize, SURFACE_SIZE as usize],
            self.pixels.as_raw(),
        )
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}

/// Standard source-over blend of straight-alpha pixels. The surface is opaque,
/// so the result keeps full alpha.
fn blend_over(base: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
    let a = u32::from(top.0[3]);
    if a == 255 {
        return Rgba([top.0[0], top.0[1], top.0[2], 255]);
    }
    if a == 0 {
        return base;
    }
    let inv = 255 - a;
    let mix = |t: u8, b: u8| ((u32::from(t) * a + u32::from(b) * inv + 127) / 255) as u8;
    Rgba([
        mix(top.0[0], base.0[0]),
        mix(top.0[1], base.0[1]),
        mix(top.0[2], base.0[2]),
        255,
    ])
}
