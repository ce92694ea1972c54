//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.

pub mod color;
pub mod dimensions;
pub mod rect;

pub use color::{ColorParseError, Rgb};
pub use dimensions::{Point, Resolution, ResolutionParseError};
pub use rect::Rect;
