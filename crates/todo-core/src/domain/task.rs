//! Task Entity
//!
//! The canonical task record. Text is fixed at creation; only `completed` changes.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Task identifier, unique within the stored collection
pub type TaskId = u32;

/// A single todo task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, stable for the task's lifetime
    pub id: TaskId,
    /// Task text (trimmed, non-empty when added through the repository)
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Build a record without validation (input goes through `validate_text` first)
    pub fn new(id: TaskId, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }

    /// Trimmed task text; whitespace-only input is rejected
    pub fn validate_text(raw_text: &str) -> DomainResult<&str> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(DomainError::Validation("task text is empty".to_string()));
        }
        Ok(text)
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_text() {
        assert_eq!(Task::validate_text("  buy milk \n").unwrap(), "buy milk");
        assert_eq!(Task::validate_text(" a b ").unwrap(), "a b");
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        assert!(matches!(Task::validate_text(""), Err(DomainError::Validation(_))));
        assert!(matches!(Task::validate_text(" \t "), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_entity_id() {
        assert_eq!(Task::new(3, "a", false).id(), 3);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Task::new(1, "a", true)).unwrap();
        assert_eq!(json, r#"{"id":1,"text":"a","completed":true}"#);
    }
}
