//! SetBackgroundUseCase - pick the image painted under the roadmap

use std::path::Path;

use crate::application::ports::{BackgroundLibrary, DocumentRepository};
use crate::domain::entities::RoadmapDocument;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Resolution;

use super::EditError;

/// Smallest image accepted without `force`
pub const DEFAULT_MIN_BACKGROUND: Resolution = Resolution {
    width: 1280,
    height: 720,
};

/// Use case for choosing a background image
pub struct SetBackgroundUseCase<'a, R, B>
where
    R: DocumentRepository + ?Sized,
    B: BackgroundLibrary + ?Sized,
{
    repository: &'a R,
    library: &'a B,
    minimum: Resolution,
}

impl<'a, R, B> SetBackgroundUseCase<'a, R, B>
where
    R: DocumentRepository + ?Sized,
    B: BackgroundLibrary + ?Sized,
{
    pub fn new(repository: &'a R, library: &'a B) -> Self {
        Self {
            repository,
            library,
            minimum: DEFAULT_MIN_BACKGROUND,
        }
    }

    pub fn with_minimum(mut self, minimum: Resolution) -> Self {
        self.minimum = minimum;
        self
    }

    /// Import `source` and point the document at it. Images below the
    /// minimum size are stretched at render time, so they need `force`.
    pub fn execute(&self, source: &Path, force: bool) -> Result<RoadmapDocument, EditError> {
        let size = self.library.dimensions(source)?;
        if (size.width < self.minimum.width || size.height < self.minimum.height) && !force {
            return Err(DomainError::ValidationError(format!(
                "image is {}, below the recommended {}; it would be stretched (use --force to accept)",
                size, self.minimum
            ))
            .into());
        }

        let mut document = self.repository.load()?;
        let name = self.library.import(source, document.output_dir())?;
        document.background_image = Some(name.clone());
        self.repository.save(&document)?;

        crate::log!("Background set to {} ({})", name, size);
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ports::document_port::testing::MemoryRepository;
    use crate::application::ports::CanvasError;
    use crate::domain::entities::roadmap::tests::sample_document;

    struct FixedLibrary(Resolution);

    impl BackgroundLibrary for FixedLibrary {
        fn dimensions(&self, source: &Path) -> Result<Resolution, CanvasError> {
            if source.extension().is_none() {
                return Err(CanvasError::Read {
                    path: source.to_path_buf(),
                    message: "not an image".to_string(),
                });
            }
            Ok(self.0)
        }

        fn import(&self, source: &Path, _destination: &Path) -> Result<String, CanvasError> {
            Ok(source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default())
        }
    }

    #[test]
    fn test_set_background_stores_file_name() {
        let repo = MemoryRepository::new(sample_document());
        let library = FixedLibrary(Resolution::new(1920, 1080));

        let doc = SetBackgroundUseCase::new(&repo, &library)
            .execute(&PathBuf::from("/pictures/mountains.jpg"), false)
            .unwrap();
        assert_eq!(doc.background_image.as_deref(), Some("mountains.jpg"));
        assert_eq!(repo.saves.get(), 1);
    }

    #[test]
    fn test_small_image_requires_force() {
        let repo = MemoryRepository::new(sample_document());
        let library = FixedLibrary(Resolution::new(800, 600));
        let use_case = SetBackgroundUseCase::new(&repo, &library);

        assert!(matches!(
            use_case.execute(Path::new("small.png"), false),
            Err(EditError::Domain(DomainError::ValidationError(_)))
        ));
        assert_eq!(repo.saves.get(), 0);

        assert!(use_case.execute(Path::new("small.png"), true).is_ok());
    }

    #[test]
    fn test_unreadable_image_is_reported() {
        let repo = MemoryRepository::new(sample_document());
        let library = FixedLibrary(Resolution::new(1920, 1080));

        assert!(matches!(
            SetBackgroundUseCase::new(&repo, &library).execute(Path::new("notes"), true),
            Err(EditError::Image(CanvasError::Read { .. }))
        ));
    }
}
