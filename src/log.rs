//! Simple file-based logging
//!
//! Nothing is written until [`init`] has opened a log file, so library code
//! and tests can call `log!` unconditionally.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_else(|_| PathBuf::from("evometric"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default log location (%APPDATA%\evometric\evometric.log on Windows)
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("evometric"))
        .unwrap_or_else(exe_dir)
        .join("evometric.log")
}

/// Initialize logging to the given file, truncating any previous run
pub fn init(log_path: &Path) {
    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    if let Ok(file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
    {
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = Some(file);
        }
    }

    log("=== EvoMetric Log Started ===");
}

/// Log a message to the file
pub fn log(msg: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let ts = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", ts, msg);
            let _ = file.flush();
        }
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

/// Log with function context
#[macro_export]
macro_rules! log_fn {
    ($fn_name:expr) => {
        $crate::log::log(&format!("-> {}", $fn_name))
    };
    ($fn_name:expr, $($arg:tt)*) => {
        $crate::log::log(&format!("-> {}: {}", $fn_name, format!($($arg)*)))
    };
}
