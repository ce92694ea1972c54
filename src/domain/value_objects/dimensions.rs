//! Dimension value objects - Point and Resolution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A position on the canvas in pixels (top-left origin)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by integer pixel offsets
    pub fn offset(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx as f32, self.y + dy as f32)
    }
}

/// Output image size, written as `"WIDTHxHEIGHT"` in the roadmap document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Horizontal margin used by the layout and the progress bar
    pub fn margin_x(&self) -> u32 {
        self.width / 20
    }

    /// Vertical margin used by the layout
    pub fn margin_y(&self) -> u32 {
        self.height / 20
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = ResolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| ResolutionParseError(s.to_string()))?;
        let width = w
            .trim()
            .parse::<u32>()
            .map_err(|_| ResolutionParseError(s.to_string()))?;
        let height = h
            .trim()
            .parse::<u32>()
            .map_err(|_| ResolutionParseError(s.to_string()))?;

        if width == 0 || height == 0 {
            return Err(ResolutionParseError(s.to_string()));
        }
        Ok(Self { width, height })
    }
}

impl TryFrom<String> for Resolution {
    type Error = ResolutionParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Resolution> for String {
    fn from(r: Resolution) -> Self {
        r.to_string()
    }
}

/// Error parsing a `"WIDTHxHEIGHT"` string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid resolution '{0}', expected WIDTHxHEIGHT with non-zero sides")]
pub struct ResolutionParseError(pub String);
