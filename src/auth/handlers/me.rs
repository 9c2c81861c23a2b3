/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * This route sits behind the auth middleware; the handler receives the
 * verified identity through the `AuthUser` extractor and only has to load
 * the record.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::db::get_user_by_email;
use crate::users::model::UserResponse;

/// Get current user handler
///
/// Returns the public representation of the authenticated user (no hash,
/// no timestamps).
///
/// # Errors
///
/// * `400 User not found` - the token's user has disappeared
/// * `500` - database failure
pub async fn me(
    AuthUser(auth): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = state.pool()?;

    let user = get_user_by_email(pool, &auth.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.email);
            ApiError::bad_request("User not found")
        })?;

    Ok(Json(user.to_response(&state.config)))
}
