//! RenderWallpaperUseCase - the full render-and-apply pipeline
//!
//! base canvas → roadmap layout → progress bar → save → apply.
//! Runs synchronously on the calling thread. Two renders racing on the same
//! output path are not guarded against; the save is atomic, so the last
//! writer wins and no half-written file is left behind.

use std::path::PathBuf;

use thiserror::Error;

use crate::application::ports::{
    ApplyError, CanvasCompositor, CanvasError, DesktopBackground, DocumentError,
    DocumentRepository,
};
use crate::application::services::{render_progress_bar, render_roadmap, LayoutMetrics};
use crate::domain::entities::{ProgressCounters, RoadmapDocument};

/// Fatal pipeline failure; the desktop is left untouched
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to load roadmap: {0}")]
    Load(#[from] DocumentError),

    #[error("Failed to produce wallpaper: {0}")]
    Save(#[from] CanvasError),
}

/// Outcome of a render that produced an image
#[derive(Debug)]
pub struct RenderReport {
    pub counters: ProgressCounters,
    pub output_path: PathBuf,
    /// Result of pushing the image to the desktop; failure here is not fatal
    pub applied: Result<(), ApplyError>,
}

/// Use case for rendering a roadmap and applying it as wallpaper
pub struct RenderWallpaperUseCase<C, D>
where
    C: CanvasCompositor,
    D: DesktopBackground,
{
    compositor: C,
    desktop: D,
    metrics: LayoutMetrics,
}

impl<C, D> RenderWallpaperUseCase<C, D>
where
    C: CanvasCompositor,
    D: DesktopBackground,
{
    /// Create a new render use case
    pub fn new(compositor: C, desktop: D) -> Self {
        Self {
            compositor,
            desktop,
            metrics: LayoutMetrics::default(),
        }
    }

    /// Paint `document` onto a fresh canvas without saving it
    pub fn paint(&self, document: &RoadmapDocument) -> Result<(C::Canvas, ProgressCounters), CanvasError> {
        let mut canvas = self.compositor.base_canvas(document)?;
        let counters = render_roadmap(&mut canvas, document, &self.metrics);
        render_progress_bar(
            &mut canvas,
            &counters,
            document.resolution,
            document.completed_text_color,
        );
        Ok((canvas, counters))
    }

    /// Render `document`, save it and apply it to the desktop
    pub fn execute(&self, document: &RoadmapDocument) -> Result<RenderReport, PipelineError> {
        crate::log_fn!(
            "RenderWallpaperUseCase::execute",
            "{} modules at {}",
            document.modules.len(),
            document.resolution
        );

        let (canvas, counters) = self.paint(document)?;
        crate::log!(
            "Painted roadmap: {} of {} practices",
            counters.completed,
            counters.total
        );

        let output_path = self.compositor.save(canvas, document)?;
        crate::log!("Saved wallpaper to {:?}", output_path);

        let applied = self.desktop.apply_background(&output_path);
        match &applied {
            Ok(()) => crate::log!("Wallpaper applied"),
            Err(e) => crate::log!("Warning: wallpaper not applied: {}", e),
        }

        Ok(RenderReport {
            counters,
            output_path,
            applied,
        })
    }

    /// Load the document from `repository`, then [`execute`](Self::execute)
    pub fn execute_from<R: DocumentRepository + ?Sized>(
        &self,
        repository: &R,
    ) -> Result<RenderReport, PipelineError> {
        let document = repository.load()?;
        self.execute(&document)
    }
}
