//! CanvasPort - interface for the raster surface the wallpaper is painted on
//!
//! Fonts are resolved before a canvas is created, so drawing calls name a
//! [`FontTier`] instead of carrying font handles around.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::RoadmapDocument;
use crate::domain::value_objects::{Point, Rect, Resolution, Rgb};

/// The four text sizes used on the wallpaper
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontTier {
    Title,
    Phase,
    Module,
    Practice,
}

impl FontTier {
    pub const ALL: [FontTier; 4] = [
        FontTier::Title,
        FontTier::Phase,
        FontTier::Module,
        FontTier::Practice,
    ];
}

/// Measured extent of a text run
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width in pixels
    pub width: f32,
    /// Ascent in pixels, `None` when the font exposes no metrics
    pub ascent: Option<f32>,
}

/// Canvas operation error
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Canvas dimensions rejected by the rasterizer
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Output extension does not name a supported image format
    #[error("Unsupported output format for {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Encoding or writing the output failed
    #[error("Failed to save {}: {message}", .path.display())]
    Save { path: PathBuf, message: String },

    /// Reading or decoding an image failed
    #[error("Failed to read image {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
}

/// A surface that text and rectangles can be painted on
pub trait TextCanvas {
    /// Paint `text` with its top-left corner at `position`
    fn draw_text(&mut self, position: Point, text: &str, tier: FontTier, color: Rgb);

    /// Fill `rect`, optionally framed by a one-pixel border
    fn draw_rect(&mut self, rect: Rect, fill: Rgb, outline: Option<Rgb>);

    /// Measure `text` as it would be painted
    fn measure_text(&self, text: &str, tier: FontTier) -> TextMetrics;
}

/// Builds base canvases and persists finished ones
pub trait CanvasCompositor {
    type Canvas: TextCanvas;

    /// Solid color or stretched background image, sized to the resolution
    fn base_canvas(&self, document: &RoadmapDocument) -> Result<Self::Canvas, CanvasError>;

    /// Write the finished canvas to the document's output path
    fn save(&self, canvas: Self::Canvas, document: &RoadmapDocument) -> Result<PathBuf, CanvasError>;
}

/// Stores user-picked background images next to the wallpaper
pub trait BackgroundLibrary {
    /// Decode `source` far enough to report its pixel size
    fn dimensions(&self, source: &Path) -> Result<Resolution, CanvasError>;

    /// Copy `source` into `destination` and return the name to store in the document
    fn import(&self, source: &Path, destination: &Path) -> Result<String, CanvasError>;
}
