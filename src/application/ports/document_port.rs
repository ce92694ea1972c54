//! DocumentPort - persistence of the roadmap document

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::RoadmapDocument;
use crate::domain::errors::DomainError;

/// Error loading or saving the roadmap document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read or written
    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid roadmap document
    #[error("Malformed roadmap {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be encoded for writing
    #[error("Cannot serialize roadmap for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but breaks an invariant
    #[error("Invalid roadmap {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Port interface for loading and storing the whole checklist
pub trait DocumentRepository {
    /// Load and validate the document
    fn load(&self) -> Result<RoadmapDocument, DocumentError>;

    /// Persist the document, replacing the previous version atomically
    fn save(&self, document: &RoadmapDocument) -> Result<(), DocumentError>;
}

/// Where the cooldown timestamp is kept
pub trait CompletionLog {
    /// Unix time (seconds) of the last completion, `None` if unknown
    fn last_completion(&self) -> Option<f64>;

    /// Remember `timestamp` as the last completion
    fn record_completion(&self, timestamp: f64) -> std::io::Result<()>;
}
