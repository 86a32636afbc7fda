//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The entry book is
//! the only place entries are mutated; components go through the helpers
//! below.

use leptos::prelude::*;
use proglog_core::{Entry, EntryBook, NewEntry, Repository, Status, StatusCounts};
use reactive_stores::Store;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// All entries of this session, newest first
    pub book: EntryBook,
    /// Entry open in the detail view (None = list)
    pub selected_entry: Option<u32>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

pub fn new_dashboard_store(book: EntryBook) -> DashboardStore {
    Store::new(DashboardState {
        book,
        selected_entry: None,
    })
}

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of all entries (tracked)
pub fn store_entries(store: &DashboardStore) -> Vec<Entry> {
    store.book().read().list().to_vec()
}

/// Find an entry without subscribing to later changes
pub fn store_find_entry_untracked(store: &DashboardStore, id: u32) -> Option<Entry> {
    store.book().read_untracked().find_by_id(id).cloned()
}

pub fn store_status_counts(store: &DashboardStore) -> StatusCounts {
    store.book().read().status_counts()
}

/// Add a new entry at the top of the list
pub fn store_add_entry(store: &DashboardStore, draft: NewEntry) -> Option<Entry> {
    match store.book().write().create(draft) {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::debug!("add entry ignored: {}", e);
            None
        }
    }
}

/// Replace a whole entry by ID
pub fn store_replace_entry(store: &DashboardStore, entry: Entry) {
    let id = entry.id;
    if let Err(e) = store.book().write().replace(id, entry) {
        log::warn!("[STORE] {}", e);
    }
}

/// Change only the status of an entry
pub fn store_set_status(store: &DashboardStore, id: u32, status: Status) {
    if let Err(e) = store.book().write().set_status(id, status) {
        log::warn!("[STORE] {}", e);
    }
}

/// Remove an entry from the store by ID
pub fn store_remove_entry(store: &DashboardStore, id: u32) {
    if let Err(e) = store.book().write().delete(id) {
        log::warn!("[STORE] {}", e);
    }
    if store.selected_entry().get_untracked() == Some(id) {
        *store.selected_entry().write() = None;
    }
}

/// Currently opened entry (tracked)
pub fn store_selected(store: &DashboardStore) -> Option<u32> {
    store.selected_entry().get()
}

/// Open an entry in the detail view, or go back to the list with None
pub fn store_select(store: &DashboardStore, id: Option<u32>) {
    *store.selected_entry().write() = id;
}
