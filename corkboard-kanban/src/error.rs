//! Error types for the entity store

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in store operations
///
/// Every variant is raised before any state is touched, so an error never
/// leaves the store partially updated.
#[derive(Debug, Error)]
pub enum BoardError {
    /// User not found
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    /// Workspace not found
    #[error("workspace not found: {id}")]
    WorkspaceNotFound { id: String },

    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Comment not found
    #[error("comment not found: {id}")]
    CommentNotFound { id: String },

    /// The operation needs an acting user and none is set
    #[error("no acting user is set")]
    NoActingUser,

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Check if this error reports a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. }
                | Self::WorkspaceNotFound { .. }
                | Self::BoardNotFound { .. }
                | Self::ListNotFound { .. }
                | Self::CardNotFound { .. }
                | Self::CommentNotFound { .. }
        )
    }
}

impl From<figment::Error> for BoardError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::CardNotFound {
            id: "abc123".into(),
        };
        assert_eq!(err.to_string(), "card not found: abc123");
    }

    #[test]
    fn test_invalid_value() {
        let err = BoardError::invalid_value("title", "too long");
        assert_eq!(err.to_string(), "invalid value for title: too long");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(BoardError::ListNotFound { id: "x".into() }.is_not_found());
        assert!(!BoardError::NoActingUser.is_not_found());
        assert!(!BoardError::duplicate_id("user", "u").is_not_found());
    }
}
