//! Application Services - the drawing steps of a wallpaper render
//!
//! Each step paints onto a [`TextCanvas`](crate::application::ports::TextCanvas)
//! and knows nothing about fonts files or pixels.

pub mod layout;
pub mod outlined_text;
pub mod progress_bar;

pub use layout::{render_roadmap, LayoutMetrics};
pub use outlined_text::{clamp_outline_width, draw_outlined_text, OutlineStyle, MAX_OUTLINE_WIDTH};
pub use progress_bar::{render_progress_bar, ProgressBarLayout};
