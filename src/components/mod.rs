//! UI Components
//!
//! Leptos components for the sign-in flow, the dashboard and the entry
//! detail panels.

mod brainstorm;
mod dashboard;
mod delete_confirm_button;
mod entry_detail;
mod logic_map_panel;
mod logs_history;
mod navbar;
mod sign_in;
mod sign_up;
mod task_section;
mod toaster;
mod whiteboard;

pub use brainstorm::Brainstorm;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use entry_detail::{EntryDetail, EntryDraft};
pub use logic_map_panel::LogicMapPanel;
pub use logs_history::LogsHistory;
pub use navbar::{BrandHeader, Navbar};
pub use sign_in::SignIn;
pub use sign_up::SignUp;
pub use task_section::{StatusSelect, TaskSection};
pub use toaster::Toaster;
pub use whiteboard::Whiteboard;
