/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Check that email and password are present
 * 2. Look up user by email
 * 3. Verify password using bcrypt
 * 4. Generate a JWT token and return it
 *
 * # Security
 *
 * - Unknown email and wrong password both answer "Invalid email or
 *   password"; only the status code differs (400 vs 401)
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::get_user_by_email;
use crate::users::model::User;

/// Login handler
///
/// # Errors
///
/// * `401` - missing email/password or wrong password
/// * `400` - unknown email
/// * `500` - database, hashing or token signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::unauthorized("Email and password are required"));
    }

    tracing::info!("Login request for: {}", request.email);

    let pool = state.pool()?;

    let user = authenticate(
        get_user_by_email(pool, &request.email).await?,
        &request.password,
    )?;

    let access_token = create_token(user.id, user.email.clone())?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(TokenResponse { access_token }))
}

/// Check a looked-up user against the supplied password
///
/// Unknown email answers 400, wrong password 401, both with the same
/// message.
fn authenticate(user: Option<User>, password: &str) -> Result<User, ApiError> {
    let user = user.ok_or_else(|| {
        tracing::warn!("Login attempt for unknown email");
        ApiError::bad_request("Invalid email or password")
    })?;

    if !user.password_is_valid(password)? {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn stored_user(password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Wesley Alves".to_string(),
            email: "wesley@email.com".to_string(),
            // Minimum cost keeps the test fast; verification is identical.
            password_hash: bcrypt::hash(password, 4).unwrap(),
            image: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unknown_email_answers_400() {
        let err = authenticate(None, "teste@123").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.messages(), vec!["Invalid email or password".to_string()]);
    }

    #[test]
    fn wrong_password_answers_401() {
        let err = authenticate(Some(stored_user("teste@123")), "wrong-password").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.messages(), vec!["Invalid email or password".to_string()]);
    }

    #[test]
    fn correct_password_is_accepted() {
        let user = authenticate(Some(stored_user("teste@123")), "teste@123").unwrap();
        assert_eq!(user.email, "wesley@email.com");
    }
}
