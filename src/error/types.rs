/**
 * API Error Types
 *
 * This module defines the error enum used by HTTP handlers. Each variant
 * carries enough context to produce the uniform `{"errors": [...]}` JSON
 * body with the right status code.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Generic message returned for any unexpected failure.
///
/// Database errors, hashing failures and token signing failures all
/// collapse into this message so that internals never leak to clients.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Errors that can occur while handling an API request
///
/// Each variant maps to an HTTP status code and a list of error messages.
/// Handlers return `Result<Json<T>, ApiError>` and rely on the
/// `IntoResponse` implementation in [`crate::error::conversion`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more validation failures (length bounds, bad email, duplicate
    /// email). Rendered as 400 with every message in the `errors` array.
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    /// A request that references something that does not exist, or carries
    /// input the endpoint cannot act on. Rendered as 400.
    #[error("{0}")]
    BadRequest(String),

    /// Missing or invalid credentials/token. Rendered as 401.
    #[error("{0}")]
    Unauthorized(String),

    /// Database failure. Rendered as 500 with the generic message.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure. Rendered as 500.
    #[error("bcrypt error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure. Verification failures are mapped to
    /// `Unauthorized` before they reach this variant.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Any other unexpected failure (missing pool, filesystem error).
    #[error("internal error")]
    Internal,
}

impl ApiError {
    /// Create a validation error from a list of messages
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation(messages)
    }

    /// Create a 400 error with a single message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a 401 error with a single message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Messages for the `errors` array of the response body
    ///
    /// Unexpected failures always collapse into [`UNEXPECTED_ERROR`].
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            Self::BadRequest(message) | Self::Unauthorized(message) => vec![message.clone()],
            Self::Database(_) | Self::Hash(_) | Self::Token(_) | Self::Internal => {
                vec![UNEXPECTED_ERROR.to_string()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::validation(vec!["Title must be between 3 and 50 characters".into()]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.messages(),
            vec!["Title must be between 3 and 50 characters".to_string()]
        );
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let err = ApiError::unauthorized("Token not found");
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.messages(), vec!["Token not found".to_string()]);
    }

    #[test]
    fn database_errors_are_opaque() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.messages(), vec![UNEXPECTED_ERROR.to_string()]);
    }

    #[test]
    fn validation_preserves_every_message() {
        let err = ApiError::validation(vec![
            "Name must be between 3 and 50 characters".into(),
            "Invalid email".into(),
        ]);
        assert_eq!(err.messages().len(), 2);
    }
}
