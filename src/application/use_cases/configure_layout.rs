//! ConfigureLayoutUseCase - change colors and outline width

use crate::application::ports::DocumentRepository;
use crate::application::services::MAX_OUTLINE_WIDTH;
use crate::domain::entities::RoadmapDocument;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Rgb;

use super::EditError;

/// Requested changes; `None` keeps the current value
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutChanges {
    pub background_color: Option<Rgb>,
    pub text_color: Option<Rgb>,
    pub completed_color: Option<Rgb>,
    pub outline_color: Option<Rgb>,
    pub outline_width: Option<i32>,
}

impl LayoutChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Use case for editing the display settings of the roadmap
pub struct ConfigureLayoutUseCase<'a, R: DocumentRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> ConfigureLayoutUseCase<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, changes: LayoutChanges) -> Result<RoadmapDocument, EditError> {
        if let Some(width) = changes.outline_width {
            if !(0..=MAX_OUTLINE_WIDTH as i32).contains(&width) {
                return Err(DomainError::ValidationError(format!(
                    "outline width {} outside 0..={}",
                    width, MAX_OUTLINE_WIDTH
                ))
                .into());
            }
        }

        let mut document = self.repository.load()?;
        if changes.is_empty() {
            return Ok(document);
        }

        if let Some(c) = changes.background_color {
            document.background_color = c;
        }
        if let Some(c) = changes.text_color {
            document.primary_text_color = c;
        }
        if let Some(c) = changes.completed_color {
            document.completed_text_color = c;
        }
        if let Some(c) = changes.outline_color {
            document.outline_color = c;
        }
        if let Some(w) = changes.outline_width {
            document.outline_width = w;
        }

        self.repository.save(&document)?;
        crate::log!("Layout settings updated: {:?}", changes);
        Ok(document)
    }
}
