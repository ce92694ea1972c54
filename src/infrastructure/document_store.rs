//! JSON roadmap storage
//!
//! Written pretty-printed with four-space indentation and non-ASCII text kept
//! as-is, key order preserved, via a temp file renamed over the original.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::application::ports::{DocumentError, DocumentRepository};
use crate::domain::entities::RoadmapDocument;

/// `progress.json` on disk
#[derive(Clone, Debug)]
pub struct JsonDocumentStore {
    path: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> DocumentError {
        DocumentError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Serialize with four-space indentation
pub fn to_pretty_json(document: &RoadmapDocument) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document.serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(out)
}

impl DocumentRepository for JsonDocumentStore {
    fn load(&self) -> Result<RoadmapDocument, DocumentError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let document: RoadmapDocument =
            serde_json::from_str(&content).map_err(|source| DocumentError::Parse {
                path: self.path.clone(),
                source,
            })?;
        document.validate().map_err(|source| DocumentError::Invalid {
            path: self.path.clone(),
            source,
        })?;
        Ok(document)
    }

    fn save(&self, document: &RoadmapDocument) -> Result<(), DocumentError> {
        // Never write what load would reject
        document.validate().map_err(|source| DocumentError::Invalid {
            path: self.path.clone(),
            source,
        })?;
        let bytes = to_pretty_json(document).map_err(|source| DocumentError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(&bytes).map_err(|e| self.io_error(e))?;
        tmp.flush().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        crate::log!("Saved roadmap to {:?}", self.path);
        Ok(())
    }
}
