//! Proglog Core
//!
//! Layered architecture:
//! - domain: Entries, subtasks, notes, logic map, sketch and stopwatch state
//! - repository: The in-memory entry book and its seed data
//! - auth: Mocked sign-in / sign-up validation
//! - config: Dashboard tunables

pub mod auth;
pub mod config;
pub mod domain;
pub mod progress;
pub mod repository;

pub use auth::{AuthError, Session, SignInForm, SignUpForm};
pub use config::DashboardConfig;
pub use domain::{
    export_file_name, ClickOutcome, DomainError, DomainResult, Entity, Entry, GraphNode, LogicMap, Note,
    NodeSelection, Point, Sketch, Status, Stopwatch, StrokePen, Subtask, Tool,
};
pub use progress::aggregate;
pub use repository::{EntryBook, NewEntry, Repository, StatusCounts};

#[cfg(test)]
mod tests {
    // The UI imports everything from the crate root
    use crate::{export_file_name, Sketch, StrokePen, Tool};

    #[test]
    fn test_root_exports_whiteboard_api() {
        assert_eq!(export_file_name("UI Design"), "UI Design-whiteboard.png");
        assert_eq!(Tool::default(), Tool::Draw);
        assert!(!StrokePen::default().is_down());
        assert_eq!(Sketch::from_data_url("data:,").data_url(), "data:,");
    }
}
