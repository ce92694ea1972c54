//! Cooldown timestamp kept in `last_completion.txt` beside the roadmap

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::ports::CompletionLog;

pub const COMPLETION_FILE_NAME: &str = "last_completion.txt";

/// Unix seconds, as plain text, in a file next to the document
#[derive(Clone, Debug)]
pub struct FileCompletionLog {
    path: PathBuf,
}

impl FileCompletionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log that belongs to the document at `document_path`
    pub fn beside(document_path: &Path) -> Self {
        let dir = document_path.parent().unwrap_or_else(|| Path::new(""));
        Self::new(dir.join(COMPLETION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CompletionLog for FileCompletionLog {
    fn last_completion(&self) -> Option<f64> {
        let content = fs::read_to_string(&self.path).ok()?;
        match content.trim().parse::<f64>() {
            Ok(ts) if ts.is_finite() => Some(ts),
            _ => {
                crate::log!("Ignoring unreadable completion timestamp in {:?}", self.path);
                None
            }
        }
    }

    fn record_completion(&self, timestamp: f64) -> std::io::Result<()> {
        fs::write(&self.path, timestamp.to_string())
    }
}
