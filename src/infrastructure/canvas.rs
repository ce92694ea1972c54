//! Raster canvas backed by a tiny-skia pixmap
//!
//! Glyph outlines come from ttf-parser and are filled as paths, so the only
//! font requirement is an outline (glyf/CFF) table.

use std::sync::Arc;

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

use crate::application::ports::{CanvasError, FontTier, TextCanvas, TextMetrics};
use crate::domain::value_objects::{Point, Rect, Rgb};

use super::fonts::FontSet;

/// Converts ttf-parser glyph outlines to tiny-skia paths
struct GlyphOutlineBuilder {
    builder: PathBuilder,
}

impl GlyphOutlineBuilder {
    fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
        }
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl ttf_parser::OutlineBuilder for GlyphOutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Design units (y-up) to device pixels (y-down) at pen position `(x, baseline)`
fn glyph_transform(scale: f32, x: f32, baseline: f32) -> Transform {
    Transform::from_row(scale, 0.0, 0.0, -scale, x, baseline)
}

fn solid_paint(color: Rgb, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = anti_alias;
    paint
}

/// Opaque RGB canvas the wallpaper is painted on
pub struct PixmapCanvas {
    pixmap: Pixmap,
    fonts: Arc<FontSet>,
}

impl PixmapCanvas {
    /// Create a canvas filled with `background`
    pub fn solid(width: u32, height: u32, background: Rgb, fonts: Arc<FontSet>) -> Result<Self, CanvasError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            255,
        ));
        Ok(Self { pixmap, fonts })
    }

    /// Create a canvas from straight RGBA pixels, flattened over `background`
    pub fn from_rgba(
        width: u32,
        height: u32,
        rgba: &[u8],
        background: Rgb,
        fonts: Arc<FontSet>,
    ) -> Result<Self, CanvasError> {
        let mut canvas = Self::solid(width, height, background, fonts)?;
        if rgba.len() != canvas.pixmap.data().len() {
            return Err(CanvasError::InvalidSize { width, height });
        }

        let bg = [background.r, background.g, background.b];
        for (dst, src) in canvas
            .pixmap
            .data_mut()
            .chunks_exact_mut(4)
            .zip(rgba.chunks_exact(4))
        {
            let alpha = src[3] as u32;
            for channel in 0..3 {
                let blended = (src[channel] as u32 * alpha + bg[channel] as u32 * (255 - alpha) + 127) / 255;
                dst[channel] = blended as u8;
            }
            dst[3] = 255;
        }
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb::new(p.red(), p.green(), p.blue()))
    }

    /// Pixels as tightly packed RGB rows
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((self.width() * self.height() * 3) as usize);
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue()]);
        }
        out
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if let Some(r) = tiny_skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom) {
            self.pixmap
                .fill_rect(r, &solid_paint(color, false), Transform::identity(), None);
        }
    }
}

impl TextCanvas for PixmapCanvas {
    fn draw_text(&mut self, position: Point, text: &str, tier: FontTier, color: Rgb) {
        let font = self.fonts.get(tier);
        let Some(face) = font.face.as_ref().and_then(|f| f.face()) else {
            return;
        };

        let scale = font.scale(&face);
        let baseline = position.y + face.ascender() as f32 * scale;
        let paint = solid_paint(color, true);
        let mut pen_x = position.x;

        for c in text.chars() {
            let glyph = face.glyph_index(c).unwrap_or(ttf_parser::GlyphId(0));
            let mut builder = GlyphOutlineBuilder::new();
            if face.outline_glyph(glyph, &mut builder).is_some() {
                if let Some(path) = builder.finish() {
                    self.pixmap.fill_path(
                        &path,
                        &paint,
                        FillRule::Winding,
                        glyph_transform(scale, pen_x, baseline),
                        None,
                    );
                }
            }
            pen_x += face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
        }
    }

    fn draw_rect(&mut self, rect: Rect, fill: Rgb, outline: Option<Rgb>) {
        match outline {
            Some(border) => {
                self.fill_rect(rect, border);
                let inner = rect.inset_uniform(1.0);
                if !inner.is_empty() {
                    self.fill_rect(inner, fill);
                }
            }
            None => self.fill_rect(rect, fill),
        }
    }

    fn measure_text(&self, text: &str, tier: FontTier) -> TextMetrics {
        self.fonts.get(tier).measure(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_fonts() -> Arc<FontSet> {
        Arc::new(FontSet::unavailable(18.0))
    }

    #[test]
    fn test_solid_canvas() {
        let canvas = PixmapCanvas::solid(8, 4, Rgb::new(10, 20, 30), no_fonts()).unwrap();
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.pixel(7, 3), Some(Rgb::new(10, 20, 30)));
        assert_eq!(canvas.to_rgb_bytes().len(), 8 * 4 * 3);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            PixmapCanvas::solid(0, 10, Rgb::BLACK, no_fonts()),
            Err(CanvasError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_from_rgba_flattens_alpha() {
        let rgba = [255, 0, 0, 255, 255, 0, 0, 0];
        let canvas = PixmapCanvas::from_rgba(2, 1, &rgba, Rgb::new(0, 0, 255), no_fonts()).unwrap();

        assert_eq!(canvas.pixel(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(canvas.pixel(1, 0), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_rect_with_outline() {
        let mut canvas = PixmapCanvas::solid(10, 10, Rgb::BLACK, no_fonts()).unwrap();
        canvas.draw_rect(
            Rect::new(2.0, 2.0, 8.0, 8.0),
            Rgb::new(50, 50, 50),
            Some(Rgb::new(200, 200, 200)),
        );

        assert_eq!(canvas.pixel(1, 1), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(2, 2), Some(Rgb::new(200, 200, 200)));
        assert_eq!(canvas.pixel(7, 5), Some(Rgb::new(200, 200, 200)));
        assert_eq!(canvas.pixel(3, 3), Some(Rgb::new(50, 50, 50)));
        assert_eq!(canvas.pixel(6, 6), Some(Rgb::new(50, 50, 50)));
        assert_eq!(canvas.pixel(8, 8), Some(Rgb::BLACK));
    }

    #[test]
    fn test_text_without_face_leaves_pixels_alone() {
        let mut canvas = PixmapCanvas::solid(20, 20, Rgb::WHITE, no_fonts()).unwrap();
        canvas.draw_text(Point::new(0.0, 0.0), "abc", FontTier::Title, Rgb::BLACK);

        assert!(canvas.to_rgb_bytes().iter().all(|&b| b == 255));
    }
}
