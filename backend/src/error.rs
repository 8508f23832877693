//! Error taxonomy shared by the service layer.
//!
//! Every failure is per-request: validation problems are reported before any
//! network call, upstream problems are caught at the gateway boundary and
//! turned into one of the variants below, and nothing here is fatal to the
//! process.

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// The caller supplied something we refuse to act on.
    #[error("{0}")]
    InvalidInput(String),

    /// A required secret or setting is missing.
    #[error("{0}")]
    ConfigurationError(String),

    /// An external dependency answered with a failure or could not be reached.
    #[error("{message}")]
    UpstreamError {
        status: Option<u16>,
        message: String,
    },

    /// The prediction service could not produce a verdict.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// An upstream payload could not be understood.
    #[error("{0}")]
    ParseError(String),

    /// The generative model declined the query and said why.
    #[error("{0}")]
    Rejected(String),

    /// The caller did not identify itself.
    #[error("{0}")]
    Unauthenticated(String),

    /// The caller is identified but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),

    /// The addressed entity does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }

    /// Upstream failure carrying the HTTP status the upstream returned.
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamError {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Upstream failure with no status (transport error, bad payload).
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamError {
            status: None,
            message: message.into(),
        }
    }

    /// Upstream status code if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamError { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<crate::db::RepositoryError> for ServiceError {
    fn from(err: crate::db::RepositoryError) -> Self {
        use crate::db::RepositoryError;
        match err {
            RepositoryError::NotFound { message, .. } => ServiceError::NotFound(message),
            RepositoryError::ValidationError { message, .. } => ServiceError::InvalidInput(message),
        }
    }
}
