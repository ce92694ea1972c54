//! Infrastructure Layer - implementations of the application ports
//!
//! - **fonts**: system font lookup (fontdb) and glyph metrics (ttf-parser)
//! - **canvas**: tiny-skia pixmap implementing `TextCanvas`
//! - **compositor**: base canvases, background images and encoding (image)
//! - **document_store**: `progress.json` persistence (serde_json)
//! - **completion_log**: the cooldown timestamp file

pub mod canvas;
pub mod completion_log;
pub mod compositor;
pub mod document_store;
pub mod fonts;

pub use canvas::PixmapCanvas;
pub use completion_log::FileCompletionLog;
pub use compositor::{ImageLibrary, RasterCompositor};
pub use document_store::JsonDocumentStore;
pub use fonts::{FontSet, FontSource};
