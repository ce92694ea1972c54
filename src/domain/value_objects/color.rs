//! Color value object - 8-bit RGB color
//!
//! The roadmap document stores colors as `[r, g, b]` arrays; this type is
//! the structured form passed between layout steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque RGB color (0-255 per channel)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Parses the `"R, G, B"` form typed by the user
impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ColorParseError::InvalidFormat(s.to_string()));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidChannel(part.to_string()))?;
        }
        Ok(Self::from(channels))
    }
}

/// Error parsing color from string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid color format '{0}', expected 'R, G, B'")]
    InvalidFormat(String),
    #[error("Invalid color channel '{0}', expected 0-255")]
    InvalidChannel(String),
}
