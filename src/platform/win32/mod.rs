//! Win32 platform implementation

pub mod wallpaper;

pub use wallpaper::set_wallpaper;
