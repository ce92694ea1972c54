//! Progress bar - global completion drawn near the bottom edge

use crate::application::ports::{FontTier, TextCanvas};
use crate::domain::entities::ProgressCounters;
use crate::domain::value_objects::{Point, Rect, Resolution, Rgb};

/// Bar thickness in pixels
pub const BAR_HEIGHT: f32 = 30.0;
/// Caption height when the font reports no ascent
pub const FALLBACK_CAPTION_HEIGHT: f32 = 30.0;

pub const BAR_FILL: Rgb = Rgb::new(50, 50, 50);
pub const BAR_OUTLINE: Rgb = Rgb::new(200, 200, 200);
pub const CAPTION_COLOR: Rgb = Rgb::BLACK;

/// Geometry of the bar for one render
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBarLayout {
    /// Full span of the bar
    pub background: Rect,
    /// Filled part, `None` at 0%
    pub overlay: Option<Rect>,
}

impl ProgressBarLayout {
    /// Place the bar for `resolution` and fill it to `percentage` (0..=100)
    pub fn compute(resolution: Resolution, percentage: f64) -> Self {
        let margin = resolution.margin_x() as f32;
        let top = (resolution.height - resolution.height / 10) as f32;
        let right = resolution.width as f32 - margin;
        let background = Rect::new(margin, top, right, top + BAR_HEIGHT);

        let bar_width = background.width().max(0.0) as f64;
        let fraction = percentage.clamp(0.0, 100.0) / 100.0;
        let filled = ((bar_width * fraction).floor() as f32).min(background.width());

        let overlay = (filled > 0.0).then(|| Rect::new(margin, top, margin + filled, top + BAR_HEIGHT));

        Self {
            background,
            overlay,
        }
    }

    /// Width of the filled part in pixels
    pub fn overlay_width(&self) -> f32 {
        self.overlay.map(|r| r.width()).unwrap_or(0.0)
    }
}

/// Draw the bar and its caption for `counters`
pub fn render_progress_bar<C: TextCanvas + ?Sized>(
    canvas: &mut C,
    counters: &ProgressCounters,
    resolution: Resolution,
    fill_color: Rgb,
) -> ProgressBarLayout {
    let layout = ProgressBarLayout::compute(resolution, counters.percentage());

    canvas.draw_rect(layout.background, BAR_FILL, Some(BAR_OUTLINE));
    if let Some(overlay) = layout.overlay {
        canvas.draw_rect(overlay, fill_color, None);
    }

    let caption = counters.caption();
    let metrics = canvas.measure_text(&caption, FontTier::Module);
    let text_height = metrics.ascent.unwrap_or(FALLBACK_CAPTION_HEIGHT);
    let bar = layout.background;
    let x = bar.left + ((bar.width() - metrics.width) / 2.0).floor();
    let y = bar.top + ((BAR_HEIGHT - text_height) / 2.0).floor();

    canvas.draw_text(Point::new(x, y), &caption, FontTier::Module, CAPTION_COLOR);

    layout
}
