//! Outlined text - text stamped over a square of offset copies
//!
//! Every offset `(dx, dy)` in `[-w, w]²` except the origin is painted in the
//! outline color, then the fill pass goes on top. That is `(2w+1)² - 1`
//! outline draws, so the width is capped at [`MAX_OUTLINE_WIDTH`].

use crate::application::ports::{FontTier, TextCanvas};
use crate::domain::value_objects::{Point, Rgb};

/// Widest outline the renderer will stamp
pub const MAX_OUTLINE_WIDTH: u8 = 5;

/// Clamp a document outline width into `0..=MAX_OUTLINE_WIDTH`
pub fn clamp_outline_width(width: i32) -> u8 {
    let clamped = width.clamp(0, MAX_OUTLINE_WIDTH as i32) as u8;
    if clamped as i32 != width {
        crate::log!(
            "Warning: outline width {} out of range, using {}",
            width,
            clamped
        );
    }
    clamped
}

/// Outline color and width shared by every line of a render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutlineStyle {
    pub color: Rgb,
    pub width: u8,
}

impl OutlineStyle {
    pub fn new(color: Rgb, width: u8) -> Self {
        Self {
            color,
            width: width.min(MAX_OUTLINE_WIDTH),
        }
    }

    /// Style that draws the fill pass only
    pub fn none() -> Self {
        Self::new(Rgb::BLACK, 0)
    }
}

/// Draw `text` at `position` in `fill`, outlined per `outline`
pub fn draw_outlined_text<C: TextCanvas + ?Sized>(
    canvas: &mut C,
    position: Point,
    text: &str,
    tier: FontTier,
    fill: Rgb,
    outline: OutlineStyle,
) {
    let w = outline.width as i32;
    for dx in -w..=w {
        for dy in -w..=w {
            if dx != 0 || dy != 0 {
                canvas.draw_text(position.offset(dx, dy), text, tier, outline.color);
            }
        }
    }

    canvas.draw_text(position, text, tier, fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::canvas_port::testing::RecordingCanvas;

    #[test]
    fn test_zero_width_is_a_single_fill() {
        let mut canvas = RecordingCanvas::default();
        draw_outlined_text(
            &mut canvas,
            Point::new(5.0, 5.0),
            "hi",
            FontTier::Module,
            Rgb::WHITE,
            OutlineStyle::none(),
        );

        let texts = canvas.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].0, Point::new(5.0, 5.0));
        assert_eq!(texts[0].3, Rgb::WHITE);
    }

    #[test]
    fn test_draw_count_grows_with_width() {
        for w in 1..=MAX_OUTLINE_WIDTH {
            let mut canvas = RecordingCanvas::default();
            draw_outlined_text(
                &mut canvas,
                Point::new(0.0, 0.0),
                "x",
                FontTier::Practice,
                Rgb::WHITE,
                OutlineStyle::new(Rgb::BLACK, w),
            );

            let side = 2 * w as usize + 1;
            let texts = canvas.texts();
            let outline_draws = texts.iter().filter(|t| t.3 == Rgb::BLACK).count();
            assert_eq!(outline_draws, side * side - 1);
            assert_eq!(texts.len(), side * side);
        }
    }

    #[test]
    fn test_fill_pass_is_last_and_centered() {
        let mut canvas = RecordingCanvas::default();
        let origin = Point::new(100.0, 50.0);
        draw_outlined_text(
            &mut canvas,
            origin,
            "x",
            FontTier::Title,
            Rgb::new(1, 2, 3),
            OutlineStyle::new(Rgb::BLACK, 2),
        );

        let texts = canvas.texts();
        let last = texts.last().unwrap();
        assert_eq!(last.0, origin);
        assert_eq!(last.3, Rgb::new(1, 2, 3));
        // No outline stamp lands on the origin itself
        assert!(texts[..texts.len() - 1].iter().all(|t| t.0 != origin));
        assert!(texts
            .iter()
            .all(|t| (t.0.x - origin.x).abs() <= 2.0 && (t.0.y - origin.y).abs() <= 2.0));
    }

    #[test]
    fn test_clamp_outline_width() {
        assert_eq!(clamp_outline_width(-3), 0);
        assert_eq!(clamp_outline_width(0), 0);
        assert_eq!(clamp_outline_width(3), 3);
        assert_eq!(clamp_outline_width(40), MAX_OUTLINE_WIDTH);
        assert_eq!(OutlineStyle::new(Rgb::BLACK, 9).width, MAX_OUTLINE_WIDTH);
    }
}
