//! Entry Book
//!
//! The in-memory collection of progress log entries. New entries go to the
//! front so the history lists the most recent first.

use chrono::{DateTime, Utc};

use super::traits::Repository;
use crate::domain::{next_id, DomainError, DomainResult, Entry, Status};

/// Fields collected by the "new progress log" form
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub name: String,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Entry counts per status for the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub in_progress: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Default)]
pub struct EntryBook {
    entries: Vec<Entry>,
}

impl EntryBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book holding exactly `entries`, in order
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.entries.iter().fold(StatusCounts::default(), |mut acc, e| {
            match e.status {
                Status::InProgress => acc.in_progress += 1,
                Status::Completed => acc.completed += 1,
                Status::Pending => acc.pending += 1,
            }
            acc
        })
    }

    /// Quick status change: replaces only the status of the stored entry
    pub fn set_status(&mut self, id: u32, status: Status) -> DomainResult<()> {
        let current = self
            .find_by_id(id)
            .ok_or_else(|| DomainError::entry_not_found(id))?;
        let updated = current.with_status(status);
        self.replace(id, updated)
    }
}

impl Repository<Entry> for EntryBook {
    type New = NewEntry;

    fn create(&mut self, draft: NewEntry) -> DomainResult<Entry> {
        if draft.name.is_empty() || draft.description.is_empty() {
            return Err(DomainError::InvalidInput(
                "name and description are required".to_string(),
            ));
        }
        let entry = Entry::new(next_id(), draft.name, draft.description, draft.status, draft.created_at);
        log::info!("entry {} created: '{}'", entry.id, entry.name);
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    fn find_by_id(&self, id: u32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn list(&self) -> &[Entry] {
        &self.entries
    }

    fn replace(&mut self, id: u32, mut entry: Entry) -> DomainResult<()> {
        let Some(slot) = self.entries.iter_mut().find(|e| e.id == id) else {
            log::warn!("replace: entry {} not found", id);
            return Err(DomainError::entry_not_found(id));
        };
        // ids are immutable
        entry.id = id;
        *slot = entry;
        log::info!("entry {} replaced", id);
        Ok(())
    }

    fn delete(&mut self, id: u32) -> DomainResult<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(DomainError::entry_not_found(id));
        }
        log::info!("entry {} deleted", id);
        Ok(())
    }
}
