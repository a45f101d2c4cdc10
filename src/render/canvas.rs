//! Drawing capability surface: a thin wrapper over a raster pixmap plus the
//! process-wide typeface.
//!
//! The renderer proper only ever needs filled rectangles, stroked lines,
//! baseline-anchored strings, string widths, and ascent/descent metrics;
//! everything here exists to supply those five operations.

use std::sync::OnceLock;

use fontdue::{Font, FontSettings};
use tiny_skia::{
    Color, ColorU8, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Rect, Stroke, Transform,
};

use super::error::Error;

const TYPEFACE_BYTES: &[u8] = include_bytes!("../../resources/DejaVuSans.ttf");

static TYPEFACE: OnceLock<Typeface> = OnceLock::new();

/// The bundled regular-weight face with its per-pixel vertical metrics.
///
/// fontdue line metrics scale linearly with the pixel size, so ascent and
/// descent are captured once at size 1.0 and multiplied on demand.
pub(super) struct Typeface {
    font: Font,
    ascent_per_px: f32,
    descent_per_px: f32,
}

/// Vertical metrics at a concrete pixel size. Both values are positive
/// distances from the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TextMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl Typeface {
    pub(super) fn metrics(&self, size: f32) -> TextMetrics {
        TextMetrics {
            ascent: self.ascent_per_px * size,
            descent: self.descent_per_px * size,
        }
    }
}

/// Loads the bundled typeface, parsing it at most once per process.
/// Concurrent first calls are serialized by the `OnceLock`.
pub(super) fn typeface() -> Result<&'static Typeface, Error> {
    if let Some(face) = TYPEFACE.get() {
        return Ok(face);
    }
    let font = Font::from_bytes(TYPEFACE_BYTES, FontSettings::default())
        .map_err(|e| Error::Typeface(e.to_string()))?;
    let line = font
        .horizontal_line_metrics(1.0)
        .ok_or_else(|| Error::Typeface("face has no horizontal line metrics".to_string()))?;
    let face = Typeface {
        ascent_per_px: line.ascent,
        descent_per_px: -line.descent,
        font,
    };
    Ok(TYPEFACE.get_or_init(|| face))
}

/// Mutable drawing handle over one render's pixmap.
pub(super) struct Canvas<'a> {
    pixmap: &'a mut Pixmap,
    face: &'static Typeface,
}

impl<'a> Canvas<'a> {
    pub(super) fn new(pixmap: &'a mut Pixmap, face: &'static Typeface) -> Self {
        Self { pixmap, face }
    }

    pub(super) fn metrics(&self, size: f32) -> TextMetrics {
        self.face.metrics(size)
    }

    /// Advance width of `text` at the given pixel size.
    pub(super) fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| self.face.font.metrics(ch, size).advance_width)
            .sum()
    }

    pub(super) fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    pub(super) fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    ) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        let Some(path) = pb.finish() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Draws `text` with its left edge at `x` and its baseline at `y`.
    pub(super) fn draw_text(&mut self, text: &str, x: f32, baseline: f32, size: f32, color: Color) {
        let rgba = color.to_color_u8();
        let mut pen = x;
        for ch in text.chars() {
            let (metrics, coverage) = self.face.font.rasterize(ch, size);
            let left = (pen + metrics.xmin as f32).round() as i32;
            let top =
                (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i32;
            self.blit(left, top, metrics.width, metrics.height, &coverage, rgba);
            pen += metrics.advance_width;
        }
    }

    /// Draws `text` centered horizontally on `cx`, baseline at `y`.
    pub(super) fn draw_text_centered(
        &mut self,
        text: &str,
        cx: f32,
        baseline: f32,
        size: f32,
        color: Color,
    ) {
        let width = self.text_width(text, size);
        self.draw_text(text, cx - width / 2.0, baseline, size, color);
    }

    /// Blends a glyph coverage bitmap into the pixmap, clipped to its edges.
    fn blit(&mut self, left: i32, top: i32, w: usize, h: usize, coverage: &[u8], color: ColorU8) {
        let pixmap_w = self.pixmap.width() as i32;
        let pixmap_h = self.pixmap.height() as i32;
        let pixels = self.pixmap.pixels_mut();
        for row in 0..h as i32 {
            let py = top + row;
            if py < 0 || py >= pixmap_h {
                continue;
            }
            for col in 0..w as i32 {
                let px = left + col;
                if px < 0 || px >= pixmap_w {
                    continue;
                }
                let cov = coverage[row as usize * w + col as usize];
                if cov == 0 {
                    continue;
                }
                let idx = (py * pixmap_w + px) as usize;
                pixels[idx] = blend(pixels[idx], color, cov);
            }
        }
    }
}

/// Source-over composition of a glyph pixel at `coverage` opacity onto a
/// premultiplied destination pixel.
fn blend(dst: PremultipliedColorU8, src: ColorU8, coverage: u8) -> PremultipliedColorU8 {
    let alpha = (u16::from(src.alpha()) * u16::from(coverage) / 255) as u8;
    if alpha == 0 {
        return dst;
    }
    let inv = 255 - u16::from(alpha);
    let premul = |c: u8| (u16::from(c) * u16::from(alpha) / 255) as u8;
    let over = |s: u8, d: u8| (u16::from(s) + u16::from(d) * inv / 255) as u8;
    PremultipliedColorU8::from_rgba(
        over(premul(src.red()), dst.red()),
        over(premul(src.green()), dst.green()),
        over(premul(src.blue()), dst.blue()),
        over(alpha, dst.alpha()),
    )
    .unwrap_or(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_pixmap(size: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(size, size).unwrap();
        pixmap.fill(Color::WHITE);
        pixmap
    }

    #[test]
    fn typeface_loads_and_has_sane_metrics() {
        let face = typeface().unwrap();
        let m = face.metrics(16.0);
        assert!(m.ascent > 0.0);
        assert!(m.descent >= 0.0);
        assert!(m.ascent > m.descent);
        // Linear scaling.
        let m2 = face.metrics(32.0);
        assert!((m2.ascent - 2.0 * m.ascent).abs() < 1e-4);
    }

    #[test]
    fn text_width_is_positive_and_scales() {
        let face = typeface().unwrap();
        let mut pixmap = white_pixmap(8);
        let canvas = Canvas::new(&mut pixmap, face);
        let narrow = canvas.text_width("H", 12.0);
        let wide = canvas.text_width("HH", 12.0);
        assert!(narrow > 0.0);
        assert!((wide - 2.0 * narrow).abs() < 0.5);
        assert!(canvas.text_width("H", 24.0) > narrow);
    }

    #[test]
    fn draw_text_marks_pixels() {
        let face = typeface().unwrap();
        let mut pixmap = white_pixmap(32);
        let mut canvas = Canvas::new(&mut pixmap, face);
        canvas.draw_text("N", 8.0, 24.0, 16.0, Color::BLACK);
        let darkened = pixmap
            .pixels()
            .iter()
            .filter(|p| p.red() < 128 && p.alpha() == 255)
            .count();
        assert!(darkened > 0);
    }

    #[test]
    fn fill_rect_sets_exact_color() {
        let face = typeface().unwrap();
        let mut pixmap = white_pixmap(16);
        let mut canvas = Canvas::new(&mut pixmap, face);
        canvas.fill_rect(0.0, 0.0, 8.0, 8.0, Color::from_rgba8(224, 224, 224, 255));
        let p = pixmap.pixel(4, 4).unwrap();
        assert_eq!((p.red(), p.green(), p.blue()), (224, 224, 224));
        let outside = pixmap.pixel(12, 12).unwrap();
        assert_eq!(outside.red(), 255);
    }

    #[test]
    fn stroke_line_marks_pixels_between_endpoints() {
        let face = typeface().unwrap();
        let mut pixmap = white_pixmap(32);
        let mut canvas = Canvas::new(&mut pixmap, face);
        canvas.stroke_line(2.0, 16.0, 30.0, 16.0, 2.0, Color::BLACK);
        let p = pixmap.pixel(16, 16).unwrap();
        assert!(p.red() < 64);
    }

    #[test]
    fn blend_full_coverage_replaces_background() {
        let white = PremultipliedColorU8::from_rgba(255, 255, 255, 255).unwrap();
        let black = ColorU8::from_rgba(0, 0, 0, 255);
        let out = blend(white, black, 255);
        assert_eq!((out.red(), out.green(), out.blue()), (0, 0, 0));
        assert_eq!(out.alpha(), 255);
    }

    #[test]
    fn blend_zero_coverage_is_a_no_op() {
        let white = PremultipliedColorU8::from_rgba(255, 255, 255, 255).unwrap();
        let black = ColorU8::from_rgba(0, 0, 0, 255);
        assert_eq!(blend(white, black, 0), white);
    }
}
