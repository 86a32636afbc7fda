//! Entry Status

use serde::{Deserialize, Serialize};

/// Lifecycle status of a progress log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    #[default]
    InProgress,
    Pending,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Completed, Status::InProgress, Status::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in-progress",
            Status::Pending => "pending",
        }
    }

    /// Unknown values fall back to in-progress, the form default
    pub fn from_str(s: &str) -> Self {
        match s {
            "completed" => Status::Completed,
            "pending" => Status::Pending,
            _ => Status::InProgress,
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::InProgress => "In Progress",
            Status::Pending => "Pending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        for status in Status::ALL {
            assert_eq!(Status::from_str(status.as_str()), status);
        }
        assert_eq!(Status::from_str("bogus"), Status::InProgress);
        assert_eq!(Status::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_status_serde_is_kebab_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
