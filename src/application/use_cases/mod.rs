//! Application Use Cases - Single-purpose operations
//!
//! Rendering the wallpaper, plus the checklist edits that are followed by a
//! render: adding a practice, completing one, changing colors and picking a
//! background image.

pub mod add_practice;
pub mod complete_practice;
pub mod configure_layout;
pub mod edit_error;
pub mod render_wallpaper;
pub mod set_background;

pub use add_practice::AddPracticeUseCase;
pub use complete_practice::{CompletePracticeUseCase, Completion, DEFAULT_COOLDOWN};
pub use configure_layout::{ConfigureLayoutUseCase, LayoutChanges};
pub use edit_error::EditError;
pub use render_wallpaper::{PipelineError, RenderReport, RenderWallpaperUseCase};
pub use set_background::{SetBackgroundUseCase, DEFAULT_MIN_BACKGROUND};
