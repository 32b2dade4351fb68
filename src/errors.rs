use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Invalid request data (malformed multipart, missing file part, bad filename)
    #[error("{message}")]
    BadRequest { message: String },

    /// Requested resource not found
    #[error("{message}")]
    NotFound { message: String },

    /// Request body exceeded the configured upload limit
    #[error("{message}")]
    PayloadTooLarge { message: String },

    /// A stored recording could not be written to disk
    #[error("Error saving file: {detail}")]
    SaveFailed { detail: String },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Error::SaveFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::BadRequest { message } => message.clone(),
            Error::NotFound { message } => message.clone(),
            Error::PayloadTooLarge { message } => message.clone(),
            // The save path deliberately surfaces the I/O detail so the client
            // can report what went wrong with its upload.
            Error::SaveFailed { detail } => format!("Error saving file: {detail}"),
            Error::Internal { operation } => format!("Failed to {operation}"),
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::SaveFailed { .. } | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::PayloadTooLarge { .. } => {
                tracing::warn!("Oversized request rejected: {}", self);
            }
            Error::BadRequest { .. } | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = json!({ "error": self.user_message() });

        (status, Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_class() {
        let cases = [
            (
                Error::BadRequest {
                    message: "No file selected".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::NotFound {
                    message: "Video not found".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                Error::PayloadTooLarge {
                    message: "too big".into(),
                },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                Error::SaveFailed { detail: "disk full".into() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Error::Internal {
                    operation: "start recording".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
        }
    }

    #[test]
    fn save_failure_message_carries_detail() {
        let error = Error::SaveFailed { detail: "disk full".into() };
        assert_eq!(error.user_message(), "Error saving file: disk full");
    }

    #[test]
    fn internal_errors_hide_the_cause() {
        let error = Error::Other(anyhow::anyhow!("secret connection string"));
        assert_eq!(error.user_message(), "Internal server error");
    }
}
