//! Raster compositor - base canvases in, image files out

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbImage};
use tempfile::NamedTempFile;

use crate::application::ports::{BackgroundLibrary, CanvasCompositor, CanvasError};
use crate::domain::entities::RoadmapDocument;
use crate::domain::value_objects::Resolution;

use super::canvas::PixmapCanvas;
use super::fonts::FontSet;

/// Directory a file lives in, `.` for bare file names
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Builds [`PixmapCanvas`]es and encodes them by file extension
pub struct RasterCompositor {
    fonts: Arc<FontSet>,
}

impl RasterCompositor {
    pub fn new(fonts: Arc<FontSet>) -> Self {
        Self { fonts }
    }

    /// Decode the background image and stretch it to the canvas size
    fn load_background(
        &self,
        path: &Path,
        document: &RoadmapDocument,
    ) -> Result<PixmapCanvas, CanvasError> {
        let Resolution { width, height } = document.resolution;
        let image = image::open(path).map_err(|e| CanvasError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let rgba = image.resize_exact(width, height, FilterType::Lanczos3).to_rgba8();
        PixmapCanvas::from_rgba(
            width,
            height,
            rgba.as_raw(),
            document.background_color,
            self.fonts.clone(),
        )
    }
}

impl CanvasCompositor for RasterCompositor {
    type Canvas = PixmapCanvas;

    fn base_canvas(&self, document: &RoadmapDocument) -> Result<PixmapCanvas, CanvasError> {
        let Resolution { width, height } = document.resolution;

        if let Some(path) = document.resolve_background() {
            match self.load_background(&path, document) {
                Ok(canvas) => {
                    crate::log!("Background image {:?} stretched to {}", path, document.resolution);
                    return Ok(canvas);
                }
                Err(e) => {
                    crate::log!("Warning: {}; using solid background", e);
                }
            }
        }

        PixmapCanvas::solid(width, height, document.background_color, self.fonts.clone())
    }

    fn save(&self, canvas: PixmapCanvas, document: &RoadmapDocument) -> Result<PathBuf, CanvasError> {
        let path = document.output_path.clone();
        let format = ImageFormat::from_path(&path)
            .map_err(|_| CanvasError::UnsupportedFormat(path.clone()))?;

        let save_error = |message: String| CanvasError::Save {
            path: path.clone(),
            message,
        };

        let image = RgbImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgb_bytes())
            .ok_or_else(|| save_error("pixel buffer does not match canvas size".to_string()))?;

        let mut tmp = NamedTempFile::new_in(parent_dir(&path)).map_err(|e| save_error(e.to_string()))?;
        DynamicImage::ImageRgb8(image)
            .write_to(tmp.as_file_mut(), format)
            .map_err(|e| save_error(e.to_string()))?;
        tmp.flush().map_err(|e| save_error(e.to_string()))?;
        tmp.persist(&path).map_err(|e| save_error(e.error.to_string()))?;

        Ok(path)
    }
}

/// Background images on the local file system
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageLibrary;

impl BackgroundLibrary for ImageLibrary {
    fn dimensions(&self, source: &Path) -> Result<Resolution, CanvasError> {
        let (width, height) = image::image_dimensions(source).map_err(|e| CanvasError::Read {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Resolution::new(width, height))
    }

    fn import(&self, source: &Path, destination: &Path) -> Result<String, CanvasError> {
        let file_name = source.file_name().ok_or_else(|| CanvasError::Read {
            path: source.to_path_buf(),
            message: "not a file".to_string(),
        })?;
        let dir = if destination.as_os_str().is_empty() {
            Path::new(".")
        } else {
            destination
        };
        let target = dir.join(file_name);

        let same_file = match (fs::canonicalize(source), fs::canonicalize(&target)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
        if !same_file {
            fs::copy(source, &target).map_err(|e| CanvasError::Save {
                path: target.clone(),
                message: e.to_string(),
            })?;
            crate::log!("Copied background {:?} to {:?}", source, target);
        }

        Ok(file_name.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::progress_bar::{BAR_FILL, BAR_OUTLINE};
    use crate::application::use_cases::RenderWallpaperUseCase;
    use crate::application::ports::NullDesktop;
    use crate::domain::entities::roadmap::tests::sample_document;
    use crate::domain::entities::{Practice, Subtopic};
    use tempfile::TempDir;

    fn compositor() -> RasterCompositor {
        RasterCompositor::new(Arc::new(FontSet::unavailable(18.0)))
    }

    fn document_in(dir: &TempDir) -> RoadmapDocument {
        let mut doc = sample_document();
        doc.output_path = dir.path().join("wallpaper.png");
        doc
    }

    #[test]
    fn test_missing_background_falls_back_to_solid() {
        let dir = TempDir::new().unwrap();
        let mut doc = document_in(&dir);
        doc.background_image = Some("missing.jpg".to_string());

        let canvas = compositor().base_canvas(&doc).unwrap();
        assert_eq!(canvas.pixel(5, 5), Some(doc.background_color));
    }

    #[test]
    fn test_corrupt_background_falls_back_to_solid() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bg.png"), b"not an image").unwrap();
        let mut doc = document_in(&dir);
        doc.background_image = Some("bg.png".to_string());

        let canvas = compositor().base_canvas(&doc).unwrap();
        assert_eq!(canvas.pixel(399, 299), Some(doc.background_color));
    }

    #[test]
    fn test_background_is_stretched_to_resolution() {
        let dir = TempDir::new().unwrap();
        let bg = RgbImage::from_pixel(10, 10, image::Rgb([200, 10, 10]));
        bg.save(dir.path().join("bg.png")).unwrap();
        let mut doc = document_in(&dir);
        doc.background_image = Some("bg.png".to_string());

        let canvas = compositor().base_canvas(&doc).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (400, 300));
        let center = canvas.pixel(200, 150).unwrap();
        assert!(center.r >= 198 && center.g <= 12 && center.b <= 12, "{:?}", center);
    }

    #[test]
    fn test_save_writes_decodable_image() {
        let dir = TempDir::new().unwrap();
        let doc = document_in(&dir);
        let comp = compositor();

        let canvas = comp.base_canvas(&doc).unwrap();
        let path = comp.save(canvas, &doc).unwrap();

        assert_eq!(path, doc.output_path);
        assert_eq!(image::image_dimensions(&path).unwrap(), (400, 300));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let mut doc = document_in(&dir);
        doc.output_path = dir.path().join("wallpaper.xyz");
        let comp = compositor();

        let canvas = comp.base_canvas(&doc).unwrap();
        assert!(matches!(
            comp.save(canvas, &doc),
            Err(CanvasError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut doc = document_in(&dir);
        doc.output_path = dir.path().join("nope").join("wallpaper.png");
        let comp = compositor();

        let canvas = comp.base_canvas(&doc).unwrap();
        assert!(matches!(comp.save(canvas, &doc), Err(CanvasError::Save { .. })));
        assert!(!doc.output_path.exists());
    }

    #[test]
    fn test_failed_encode_keeps_previous_output() {
        let dir = TempDir::new().unwrap();
        let mut doc = document_in(&dir);
        // ICO cannot hold images wider than 256 px
        doc.output_path = dir.path().join("wallpaper.ico");
        fs::write(&doc.output_path, b"previous wallpaper").unwrap();
        let comp = compositor();

        let canvas = comp.base_canvas(&doc).unwrap();
        assert!(matches!(comp.save(canvas, &doc), Err(CanvasError::Save { .. })));

        assert_eq!(fs::read(&doc.output_path).unwrap(), b"previous wallpaper");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_replaces_previous_output() {
        let dir = TempDir::new().unwrap();
        let doc = document_in(&dir);
        fs::write(&doc.output_path, b"stale").unwrap();
        let comp = compositor();

        let canvas = comp.base_canvas(&doc).unwrap();
        comp.save(canvas, &doc).unwrap();

        assert_eq!(image::image_dimensions(&doc.output_path).unwrap(), (400, 300));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let doc = document_in(&dir);
        let use_case = RenderWallpaperUseCase::new(compositor(), NullDesktop);

        let (first, _) = use_case.paint(&doc).unwrap();
        let (second, _) = use_case.paint(&doc).unwrap();
        assert_eq!(first.to_rgb_bytes(), second.to_rgb_bytes());
    }

    #[test]
    fn test_progress_bar_pixels() {
        let dir = TempDir::new().unwrap();
        let use_case = RenderWallpaperUseCase::new(compositor(), NullDesktop);

        // Bar spans x 20..380, y 270..300 at 400x300
        let mut empty = document_in(&dir);
        empty.modules[1].subtopics = Some(vec![Subtopic::new("S", vec![Practice::pending("a")])]);
        let (canvas, _) = use_case.paint(&empty).unwrap();
        assert_eq!(canvas.pixel(20, 270), Some(BAR_OUTLINE));
        assert_eq!(canvas.pixel(30, 280), Some(BAR_FILL));
        assert_eq!(canvas.pixel(370, 280), Some(BAR_FILL));

        let mut full = document_in(&dir);
        full.modules[1].subtopics = Some(vec![Subtopic::new("S", vec![Practice::new("a", true)])]);
        let (canvas, _) = use_case.paint(&full).unwrap();
        assert_eq!(canvas.pixel(30, 280), Some(full.completed_text_color));
        assert_eq!(canvas.pixel(370, 280), Some(full.completed_text_color));
        assert_eq!(canvas.pixel(10, 280), Some(full.background_color));
    }

    #[test]
    fn test_import_copies_next_to_output() {
        let source_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let source = source_dir.path().join("photo.png");
        RgbImage::from_pixel(1300, 800, image::Rgb([1, 2, 3]))
            .save(&source)
            .unwrap();

        let library = ImageLibrary;
        assert_eq!(library.dimensions(&source).unwrap(), Resolution::new(1300, 800));

        let name = library.import(&source, output_dir.path()).unwrap();
        assert_eq!(name, "photo.png");
        assert!(output_dir.path().join("photo.png").exists());

        // Importing a file that already sits in place is a no-op
        let again = library
            .import(&output_dir.path().join("photo.png"), output_dir.path())
            .unwrap();
        assert_eq!(again, "photo.png");
    }
}
