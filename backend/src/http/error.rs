//! HTTP error handling and response types.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ServiceError;

/// API error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Short, user-facing description
    pub error: String,
    /// Underlying cause, when it adds something
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub struct AppError {
    source: ServiceError,
    summary: Option<&'static str>,
}

impl AppError {
    /// Report `summary` as the error and the service error as the message.
    pub fn summarized(summary: &'static str, source: ServiceError) -> Self {
        Self {
            source,
            summary: Some(summary),
        }
    }

    pub fn service_error(&self) -> &ServiceError {
        &self.source
    }

    pub fn status_code(&self) -> StatusCode {
        match &self.source {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::ConfigurationError(_)
            | ServiceError::UpstreamError { .. }
            | ServiceError::ParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.source, "request failed");
        }

        let body = match self.summary {
            Some(summary) => ApiError::new(summary).with_message(self.source.to_string()),
            None => ApiError::new(self.source.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(source: ServiceError) -> Self {
        Self {
            source,
            summary: None,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::invalid_input(rejection.body_text()).into()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::invalid_input(rejection.body_text()).into()
    }
}
