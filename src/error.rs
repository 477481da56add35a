//! Error types of the task store and of its storage backends

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::task::TaskId;

/// A user-editable field of a task (or of the list filters)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Date,
    Priority,
    Status,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Date => "date",
            Field::Priority => "priority",
            Field::Status => "status",
        };
        write!(f, "{}", s)
    }
}

/// A required value is missing, or could not be understood
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(Field),

    #[error("invalid {field}: {value:?}")]
    InvalidField { field: Field, value: String },
}

/// The storage backend could not read or write the task list
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage quota exceeded ({needed} bytes needed, only {quota} allowed)")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("invalid stored data: {0}")]
    InvalidData(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by [`TaskStore`](crate::store::TaskStore) operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no task with id {0}")]
    NotFound(TaskId),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::MissingField(Field::Name).to_string(), "missing required field: name");
        assert_eq!(
            ValidationError::InvalidField{ field: Field::Priority, value: "Urgent".to_string() }.to_string(),
            "invalid priority: \"Urgent\""
        );
        assert_eq!(StoreError::NotFound(TaskId::from("t2")).to_string(), "no task with id t2");

        let quota = PersistenceError::QuotaExceeded{ needed: 120, quota: 100 };
        assert_eq!(StoreError::from(quota).to_string(), "storage quota exceeded (120 bytes needed, only 100 allowed)");
    }

    #[test]
    fn test_kinds() {
        assert!(StoreError::NotFound(TaskId::from("x")).is_not_found());
        assert!(StoreError::from(ValidationError::MissingField(Field::Date)).is_validation());
    }
}
