//! Application Ports - Interfaces for external dependencies
//!
//! Ports define the interfaces that infrastructure must implement.
//! They keep the layout and progress logic independent of the rasterizer,
//! the file format and the operating system.

pub mod canvas_port;
pub mod desktop_port;
pub mod document_port;

pub use canvas_port::{
    BackgroundLibrary, CanvasCompositor, CanvasError, FontTier, TextCanvas, TextMetrics,
};
pub use desktop_port::{ApplyError, DesktopBackground, NullDesktop};
pub use document_port::{CompletionLog, DocumentError, DocumentRepository};
