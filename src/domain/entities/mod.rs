//! Domain Entities - the checklist tree and what is derived from it

pub mod progress;
pub mod roadmap;

pub use progress::ProgressCounters;
pub use roadmap::{
    Module, ModuleKind, PendingPractice, Practice, RoadmapDocument, Subtopic, PHASE_TAG,
};
