//! Application Layer - Use Cases and Business Workflows
//!
//! This layer orchestrates domain entities and defines application-specific workflows.
//! It contains:
//! - **Use Cases**: Single-purpose operations (RenderWallpaper, AddPractice, CompletePractice)
//! - **Ports**: Interfaces for external dependencies (canvas, desktop, document storage)
//! - **Services**: The drawing steps (layout, outlined text, progress bar)
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that infrastructure implements
//! - Contains no framework-specific code

pub mod ports;
pub mod services;
pub mod use_cases;

// Re-export commonly used types
pub use ports::*;
pub use services::*;
pub use use_cases::*;
