//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO UI dependencies (serde and chrono only).

mod entity;
mod entry;
mod id;
mod logic_map;
mod note;
mod sketch;
mod status;
mod stopwatch;
mod subtask;

pub use entity::{DomainError, DomainResult, Entity};
pub use entry::Entry;
pub use id::next_id;
pub use logic_map::{ClickOutcome, GraphNode, LogicMap, NodeSelection, Point};
pub use note::Note;
pub use sketch::{export_file_name, Sketch, StrokePen, Tool};
pub use status::Status;
pub use stopwatch::Stopwatch;
pub use subtask::Subtask;
