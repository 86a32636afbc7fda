//! Brainstorm Note

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped brainstorming note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    /// Stored as typed (not trimmed)
    pub content: String,
    pub created_at: DateTime<Utc>,
}
