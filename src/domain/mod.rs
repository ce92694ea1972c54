//! Domain Layer - the roadmap checklist and its value types
//!
//! This layer contains:
//! - **Entities**: RoadmapDocument, Module, Subtopic, Practice, ProgressCounters
//! - **Value Objects**: Rgb, Point, Resolution, Rect
//! - **Domain Errors**: Error types for checklist operations
//!
//! Nothing here touches the filesystem, fonts or the desktop.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
