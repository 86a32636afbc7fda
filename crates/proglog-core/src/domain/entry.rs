//! Entry Entity
//!
//! A progress log entry plus its enrichments: subtasks, brainstorm notes,
//! whiteboard sketch and logic map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::next_id;
use super::logic_map::LogicMap;
use super::note::Note;
use super::sketch::Sketch;
use super::status::Status;
use super::subtask::Subtask;
use crate::progress::aggregate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: Status,
    /// 0..=100; derived from subtasks whenever they change
    pub percentage: u8,
    pub created_at: DateTime<Utc>,
    pub sketch: Option<Sketch>,
    pub notes: Vec<Note>,
    pub subtasks: Vec<Subtask>,
    pub logic_map: LogicMap,
}

impl Entry {
    /// Create an entry with no enrichments
    pub fn new(id: u32, name: String, description: String, status: Status, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            description,
            status,
            percentage: 0,
            created_at,
            sketch: None,
            notes: Vec::new(),
            subtasks: Vec::new(),
            logic_map: LogicMap::new(),
        }
    }

    /// Copy of this entry with only the status changed
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    fn recompute_percentage(&mut self) {
        self.percentage = aggregate(&self.subtasks);
    }

    /// Manual slider value. Only honoured while there are no subtasks.
    pub fn set_percentage(&mut self, value: u8) -> bool {
        if !self.subtasks.is_empty() {
            return false;
        }
        self.percentage = value.min(100);
        true
    }

    /// Append a subtask; blank titles are ignored
    pub fn add_subtask(&mut self, title: &str, now: DateTime<Utc>) -> Option<u32> {
        if title.trim().is_empty() {
            return None;
        }
        let id = next_id();
        self.subtasks.push(Subtask::new(id, title.to_string(), now));
        self.recompute_percentage();
        Some(id)
    }

    /// Flip a subtask; returns its new completion state
    pub fn toggle_subtask(&mut self, id: u32) -> Option<bool> {
        let task = self.subtasks.iter_mut().find(|s| s.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.recompute_percentage();
        Some(completed)
    }

    pub fn delete_subtask(&mut self, id: u32) -> bool {
        let before = self.subtasks.len();
        self.subtasks.retain(|s| s.id != id);
        // Recompute even if nothing matched; deleting never raises the value
        // above what the remaining list yields.
        self.recompute_percentage();
        self.subtasks.len() != before
    }

    /// Append a brainstorm note; blank content is ignored
    pub fn add_note(&mut self, content: &str, now: DateTime<Utc>) -> Option<u32> {
        if content.trim().is_empty() {
            return None;
        }
        let id = next_id();
        self.notes.push(Note {
            id,
            content: content.to_string(),
            created_at: now,
        });
        Some(id)
    }

    pub fn delete_note(&mut self, id: u32) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }
}

impl Entity for Entry {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry::new(1, "API Integration".into(), "Third-party APIs".into(), Status::InProgress, Utc::now())
    }

    #[test]
    fn test_entry_creation() {
        let e = entry();
        assert_eq!(e.id(), 1);
        assert_eq!(e.percentage, 0);
        assert!(e.sketch.is_none());
        assert!(e.notes.is_empty());
        assert!(e.subtasks.is_empty());
        assert!(e.logic_map.is_empty());
    }

    #[test]
    fn test_subtasks_drive_percentage() {
        let mut e = entry();
        let now = Utc::now();
        let ids: Vec<u32> = ["Research", "Auth", "Fetch", "Errors", "Tests"]
            .iter()
            .map(|t| e.add_subtask(t, now).unwrap())
            .collect();
        for id in &ids[..3] {
            assert_eq!(e.toggle_subtask(*id), Some(true));
        }
        assert_eq!(e.percentage, 60);
        assert_eq!(e.completed_subtasks(), 3);

        assert_eq!(e.toggle_subtask(ids[0]), Some(false));
        assert_eq!(e.percentage, 40);
        assert_eq!(e.toggle_subtask(9_999_999), None);
    }

    #[test]
    fn test_blank_subtask_ignored() {
        let mut e = entry();
        assert!(e.add_subtask("  \t", Utc::now()).is_none());
        assert!(e.subtasks.is_empty());
    }

    #[test]
    fn test_delete_subtask_recomputes() {
        let mut e = entry();
        let now = Utc::now();
        let a = e.add_subtask("a", now).unwrap();
        let b = e.add_subtask("b", now).unwrap();
        e.toggle_subtask(a);
        assert_eq!(e.percentage, 50);

        assert!(e.delete_subtask(a));
        assert_eq!(e.percentage, 0);
        assert!(e.delete_subtask(b));
        assert_eq!(e.percentage, 0);
        assert!(!e.delete_subtask(b));
    }

    #[test]
    fn test_delete_never_exceeds_recomputation() {
        let mut e = entry();
        let now = Utc::now();
        let ids: Vec<u32> = (0..6).map(|i| e.add_subtask(&format!("s{}", i), now).unwrap()).collect();
        for id in ids.iter().step_by(2) {
            e.toggle_subtask(*id);
        }
        for id in ids {
            e.delete_subtask(id);
            assert!(e.percentage <= aggregate(&e.subtasks));
        }
    }

    #[test]
    fn test_manual_percentage_only_without_subtasks() {
        let mut e = entry();
        assert!(e.set_percentage(42));
        assert_eq!(e.percentage, 42);
        assert!(e.set_percentage(250));
        assert_eq!(e.percentage, 100);

        e.add_subtask("one", Utc::now());
        assert_eq!(e.percentage, 0);
        assert!(!e.set_percentage(80));
        assert_eq!(e.percentage, 0);
    }

    #[test]
    fn test_notes() {
        let mut e = entry();
        let now = Utc::now();
        assert!(e.add_note("", now).is_none());
        let id = e.add_note("  keep spacing  ", now).unwrap();
        assert_eq!(e.notes[0].content, "  keep spacing  ");
        assert!(e.delete_note(id));
        assert!(e.notes.is_empty());
    }

    #[test]
    fn test_with_status_keeps_everything_else() {
        let mut e = entry();
        e.add_subtask("x", Utc::now());
        e.sketch = Some(Sketch::from_data_url("data:image/png;base64,AAAA"));
        let changed = e.with_status(Status::Completed);
        assert_eq!(changed.status, Status::Completed);
        assert_eq!(changed.subtasks, e.subtasks);
        assert_eq!(changed.sketch, e.sketch);
        assert_eq!(changed.id, e.id);
    }
}
