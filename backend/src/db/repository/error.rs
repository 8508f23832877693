//! Errors raised by review storage.
//!
//! Each error records where it happened in an [`ErrorContext`], which shows
//! up in the `Display` output and therefore in the service logs.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a repository error happened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// Repository method, e.g. "delete_review"
    pub operation: Option<String>,
    /// Entity kind, e.g. "review"
    pub entity: Option<String>,
    pub entity_id: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("operation", &self.operation),
            ("entity", &self.entity),
            ("id", &self.entity_id),
        ];
        let parts: Vec<String> = fields
            .iter()
            .filter_map(|&(key, value)| value.as_ref().map(|v| format!("{}={}", key, v)))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    /// No review with the requested id.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// The store refused to persist the record.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    pub fn not_found_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn validation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::NotFound { context, .. } | Self::ValidationError { context, .. } => context,
        }
    }
}
