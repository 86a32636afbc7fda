//! Repository Layer
//!
//! The in-memory entry book and its seed data.

mod entry_book;
mod seed;
mod traits;

#[cfg(test)]
mod tests;

pub use entry_book::{EntryBook, NewEntry, StatusCounts};
pub use seed::sample_book;
pub use traits::Repository;
