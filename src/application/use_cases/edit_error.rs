//! Error shared by the checklist editing use cases

use thiserror::Error;

use crate::application::ports::{CanvasError, DocumentError};
use crate::domain::errors::DomainError;

/// Failure of an editing operation; the document on disk is unchanged
#[derive(Error, Debug)]
pub enum EditError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Image(#[from] CanvasError),
}
