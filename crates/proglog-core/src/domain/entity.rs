//! Domain Layer - Core Entity Trait
//!
//! Every entry and every entry child (subtask, note, node) carries a
//! session-unique id.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No stored record of `kind` has this id
    NotFound { kind: &'static str, id: u32 },
    /// A draft failed validation
    InvalidInput(String),
}

impl DomainError {
    pub fn entry_not_found(id: u32) -> Self {
        DomainError::NotFound { kind: "entry", id }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound { kind, id } => write!(f, "Not found: {} {}", kind, id),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::entry_not_found(7);
        assert_eq!(err.to_string(), "Not found: entry 7");
        let err = DomainError::InvalidInput("name is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: name is empty");
    }
}
