//! Platform abstraction layer
//!
//! Windows sets the wallpaper through `SystemParametersInfoW`, Linux desktops
//! through GNOME's `gsettings`. Anything else reports `Unsupported`.

use std::path::Path;

use crate::application::ports::{ApplyError, DesktopBackground};

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(target_os = "linux")]
pub mod linux;

/// The desktop of the machine this process runs on
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDesktop;

impl DesktopBackground for SystemDesktop {
    fn apply_background(&self, path: &Path) -> Result<(), ApplyError> {
        if !path.exists() {
            return Err(ApplyError::MissingFile(path.to_path_buf()));
        }

        #[cfg(target_os = "windows")]
        {
            win32::set_wallpaper(path)
        }

        #[cfg(target_os = "linux")]
        {
            linux::set_wallpaper(path)
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux")))]
        {
            Err(ApplyError::Unsupported)
        }
    }
}
