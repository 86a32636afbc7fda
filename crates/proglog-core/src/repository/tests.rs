//! Entry book tests.

use chrono::{Local, Utc};

use crate::domain::{DomainError, Point, Status};
use crate::repository::{sample_book, EntryBook, NewEntry, Repository, StatusCounts};

fn draft(name: &str) -> NewEntry {
    NewEntry {
        name: name.to_string(),
        description: format!("{} description", name),
        status: Status::InProgress,
        created_at: Utc::now(),
    }
}

#[test]
fn test_create_entry() {
    let mut book = EntryBook::new();
    let created = book.create(draft("Landing page")).expect("Failed to create");

    assert!(created.id > 0);
    assert_eq!(created.name, "Landing page");
    assert_eq!(created.percentage, 0);
    assert!(created.subtasks.is_empty());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_create_requires_name_and_description() {
    let mut book = EntryBook::new();
    let mut d = draft("x");
    d.description.clear();
    assert!(matches!(book.create(d), Err(DomainError::InvalidInput(_))));

    let mut d = draft("x");
    d.name.clear();
    assert!(book.create(d).is_err());
    assert!(book.is_empty());
}

#[test]
fn test_new_entries_go_first() {
    let mut book = EntryBook::new();
    let first = book.create(draft("first")).unwrap();
    let second = book.create(draft("second")).unwrap();
    assert_ne!(first.id, second.id);

    let names: Vec<&str> = book.list().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["second", "first"]);
}

#[test]
fn test_find_by_id() {
    let mut book = EntryBook::new();
    let created = book.create(draft("Find me")).unwrap();

    let found = book.find_by_id(created.id);
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Find me");
    assert!(book.find_by_id(created.id + 10_000).is_none());
}

#[test]
fn test_replace_keeps_id() {
    let mut book = EntryBook::new();
    let created = book.create(draft("Original")).unwrap();

    let mut edited = created.clone();
    edited.id = 0;
    edited.name = "Updated".to_string();
    edited.add_subtask("step", Utc::now());
    book.replace(created.id, edited).expect("Replace failed");

    let stored = book.find_by_id(created.id).unwrap();
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.name, "Updated");
    assert_eq!(stored.subtasks.len(), 1);
    assert!(book.find_by_id(0).is_none());
}

#[test]
fn test_replace_unknown_is_not_found() {
    let mut book = EntryBook::new();
    let created = book.create(draft("a")).unwrap();
    let result = book.replace(created.id + 10_000, created);
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[test]
fn test_delete_entry() {
    let mut book = EntryBook::new();
    let created = book.create(draft("To delete")).unwrap();

    book.delete(created.id).expect("Delete failed");
    assert!(book.find_by_id(created.id).is_none());
    assert!(book.delete(created.id).is_err());
}

#[test]
fn test_quick_status_change() {
    let mut book = EntryBook::new();
    let mut created = book.create(draft("Status")).unwrap();
    created.add_note("idea", Utc::now());
    created.logic_map.add_node("Start", Point::new(60.0, 60.0));
    book.replace(created.id, created.clone()).unwrap();

    book.set_status(created.id, Status::Completed).unwrap();
    let stored = book.find_by_id(created.id).unwrap();
    assert_eq!(stored.status, Status::Completed);
    assert_eq!(stored.notes, created.notes);
    assert_eq!(stored.logic_map, created.logic_map);
    assert_eq!(stored.description, created.description);
}

#[test]
fn test_status_counts() {
    let book = sample_book();
    assert_eq!(
        book.status_counts(),
        StatusCounts {
            in_progress: 1,
            completed: 1,
            pending: 1,
        }
    );
}

#[test]
fn test_sample_book() {
    let book = sample_book();
    let names: Vec<&str> = book.list().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Project Setup", "API Integration", "UI Design"]);

    let api = &book.list()[1];
    assert_eq!(api.subtasks.len(), 5);
    assert_eq!(api.completed_subtasks(), 3);
    assert_eq!(api.percentage, 60);
    assert_eq!(book.list()[0].percentage, 100);
    assert_eq!(book.list()[2].percentage, 0);
}

#[test]
fn test_detail_edit_round_trip() {
    let mut book = sample_book();
    let id = book.list()[1].id;

    // Detail views edit a copy and push the whole object back
    let mut copy = book.find_by_id(id).unwrap().clone();
    let last = copy.subtasks.last().unwrap().id;
    copy.toggle_subtask(last);
    book.replace(id, copy).unwrap();

    assert_eq!(book.find_by_id(id).unwrap().percentage, 80);
}

#[test]
fn test_sample_times_are_local_wall_clock() {
    let book = sample_book();
    let shown: Vec<String> = book
        .list()
        .iter()
        .map(|e| e.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .collect();
    assert_eq!(shown, vec!["2025-11-07 10:30", "2025-11-08 09:15", "2025-11-08 14:00"]);
}
