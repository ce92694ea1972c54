//! EvoMetric library - roadmap checklist to desktop wallpaper
//!
//! The binary in main.rs is a thin clap front end; everything it does is
//! reachable from here so it can be tested without touching the desktop.

// Include the log module first so the log! macro works everywhere
#[macro_use]
pub mod log;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod platform;
pub mod shared;
