/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, allowing handlers
 * to return errors directly with the `?` operator.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "errors": ["Error message"]
 * }
 * ```
 *
 * Unexpected failures (database, hashing, token signing) are logged with
 * their full detail but rendered with a generic message only.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        } else {
            tracing::warn!("request rejected: {self}");
        }

        let body = serde_json::json!({ "errors": self.messages() });

        (status, Json(body)).into_response()
    }
}
