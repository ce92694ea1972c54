//! Windows wallpaper setting
//!
//! `SystemParametersInfoW(SPI_SETDESKWALLPAPER)` with the change written to
//! the user profile and broadcast, so it survives logoff and shows at once.

use std::path::Path;

use windows::Win32::UI::WindowsAndMessaging::{
    SystemParametersInfoW, SPIF_SENDWININICHANGE, SPIF_UPDATEINIFILE, SPI_SETDESKWALLPAPER,
    SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
};

use crate::application::ports::ApplyError;

/// Absolute path without the `\\?\` prefix `canonicalize` adds
fn normalize(path: &Path) -> Result<String, ApplyError> {
    let canonical = path.canonicalize().map_err(|e| {
        crate::log!("set_wallpaper() failed to canonicalize path: {:?}", e);
        ApplyError::MissingFile(path.to_path_buf())
    })?;

    let s = canonical.to_string_lossy().to_string();
    Ok(match s.strip_prefix(r"\\?\") {
        Some(stripped) => stripped.to_string(),
        None => s,
    })
}

/// Set the desktop wallpaper for the current user
pub fn set_wallpaper(path: &Path) -> Result<(), ApplyError> {
    crate::log!("set_wallpaper() called with path: {:?}", path);

    let normalized_path = normalize(path)?;
    if !Path::new(&normalized_path).exists() {
        crate::log!("set_wallpaper() failed: file does not exist");
        return Err(ApplyError::MissingFile(path.to_path_buf()));
    }

    let wide_path: Vec<u16> = normalized_path
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();

    let result = unsafe {
        SystemParametersInfoW(
            SPI_SETDESKWALLPAPER,
            0,
            Some(wide_path.as_ptr() as *mut std::ffi::c_void),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(SPIF_UPDATEINIFILE.0 | SPIF_SENDWININICHANGE.0),
        )
    };

    crate::log!("set_wallpaper() SystemParametersInfoW returned: {:?}", result);
    result.map_err(|e| ApplyError::Os(e.message().to_string()))
}
