//! Session-wide id source.
//!
//! Ids are never reused within a session, so an edge left pointing at a
//! deleted node can never be captured by a node created later.

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Allocate the next unused id
pub fn next_id() -> u32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_increasing() {
        let a = next_id();
        let b = next_id();
        assert!(b > a);
    }
}
