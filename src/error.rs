//! Application error type and its HTTP mapping.
//!
//! Handlers return `Result<_, AppError>`. Store failures are logged where they
//! are converted into responses and surface to the browser as a short,
//! generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field was missing or malformed.
    #[error("{message}")]
    Validation { message: String },

    /// The requested link does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// Any failure talking to or executing against the backing table.
    #[error("{message}: {source}")]
    Internal {
        message: String,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Internal {
            message: message.into(),
            source,
        }
    }

    /// Replaces the user-facing message of a store failure.
    ///
    /// Handlers use this to name the action that failed ("Error adding link")
    /// while the underlying driver error is kept for the log.
    pub fn context(self, message: impl Into<String>) -> Self {
        match self {
            Self::Internal { source, .. } => Self::Internal {
                message: message.into(),
                source,
            },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::internal("Database error", e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        Self::bad_request(format!("Invalid value for: {}", fields.join(", ")))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation { message } | AppError::NotFound { message } => message,
            AppError::Internal { message, source } => {
                tracing::error!(error = %source, "{message}");
                message
            }
        };

        (status, body).into_response()
    }
}
