//! GNOME-style wallpaper setting via `gsettings`

use std::path::Path;
use std::process::Command;

use crate::application::ports::ApplyError;

const SCHEMA: &str = "org.gnome.desktop.background";

/// Point both the light and dark picture URIs at `path`
pub fn set_wallpaper(path: &Path) -> Result<(), ApplyError> {
    let absolute = path
        .canonicalize()
        .map_err(|_| ApplyError::MissingFile(path.to_path_buf()))?;
    let uri = format!("file://{}", absolute.display());
    crate::log!("set_wallpaper() uri: {}", uri);

    for key in ["picture-uri", "picture-uri-dark"] {
        let output = Command::new("gsettings")
            .args(["set", SCHEMA, key, &uri])
            .output()
            .map_err(|e| ApplyError::Os(format!("gsettings: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Older GNOME releases have no dark variant
            if key == "picture-uri-dark" {
                crate::log!("set_wallpaper() {} not set: {}", key, stderr.trim());
                continue;
            }
            return Err(ApplyError::Os(stderr.trim().to_string()));
        }
    }

    Ok(())
}
