//! DesktopPort - interface for applying an image as the desktop background

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Desktop applier error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The image to apply does not exist
    #[error("Wallpaper file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The operating system rejected the request
    #[error("Operating system refused the wallpaper: {0}")]
    Os(String),

    /// No implementation for this platform
    #[error("Setting the wallpaper is not supported on this platform")]
    Unsupported,
}

/// Port interface for the OS "set desktop background" facility
pub trait DesktopBackground {
    /// Apply `path` as wallpaper, persisting it and refreshing the desktop
    fn apply_background(&self, path: &Path) -> Result<(), ApplyError>;
}

impl<T: DesktopBackground + ?Sized> DesktopBackground for &T {
    fn apply_background(&self, path: &Path) -> Result<(), ApplyError> {
        (**self).apply_background(path)
    }
}

/// A desktop that ignores every request, for headless runs and tests
pub struct NullDesktop;

impl DesktopBackground for NullDesktop {
    fn apply_background(&self, path: &Path) -> Result<(), ApplyError> {
        if !path.exists() {
            return Err(ApplyError::MissingFile(path.to_path_buf()));
        }
        Ok(())
    }
}
