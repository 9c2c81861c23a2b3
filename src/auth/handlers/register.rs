/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Check that name, email and password are present
 * 2. Validate length bounds and email shape
 * 3. Reject duplicate emails
 * 4. Hash the password using bcrypt
 * 5. Create the user and return the public representation
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Password hashes are never returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::RegisterRequest;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::{create_user, get_user_by_email};
use crate::users::model::UserResponse;
use crate::validate;

/// Registration handler
///
/// # Errors
///
/// * `401` - missing name, email or password
/// * `400` - validation failure or duplicate email
/// * `500` - database or hashing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::unauthorized("Name, email and password are required"));
    }

    tracing::info!("Registration request for: {}", request.email);

    let user = create_user_record(&state, &request.name, &request.email, &request.password).await?;

    tracing::info!("User created successfully: {}", user.email);

    Ok(Json(user))
}

/// Validate, hash and insert a new user
///
/// Shared with `POST /users`, which has the same semantics minus the
/// presence check.
pub async fn create_user_record(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
) -> Result<UserResponse, ApiError> {
    let errors = validate::user_errors(name, email, Some(password));
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let pool = state.pool()?;

    if get_user_by_email(pool, email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(ApiError::validation(vec![
            "Email already registered".to_string(),
        ]));
    }

    let password_hash = hash(password, DEFAULT_COST)?;

    let user = create_user(pool, name, email, &password_hash)
        .await
        .map_err(map_unique_violation)?;

    Ok(user.to_response(&state.config))
}

/// Map a unique-constraint race on the email column to the validation shape
///
/// Shared with the user update handler, which has the same race when
/// changing the email.
pub(crate) fn map_unique_violation(error: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return ApiError::validation(vec!["Email already registered".to_string()]);
        }
    }
    ApiError::from(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use sqlx::error::ErrorKind;

    #[derive(Debug)]
    struct StubDbError {
        unique: bool,
    }

    impl std::fmt::Display for StubDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "duplicate key value violates unique constraint")
        }
    }

    impl std::error::Error for StubDbError {}

    impl sqlx::error::DatabaseError for StubDbError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    #[test]
    fn unique_violation_becomes_duplicate_email() {
        let error = sqlx::Error::Database(Box::new(StubDbError { unique: true }));
        let mapped = map_unique_violation(error);
        assert_eq!(mapped.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(mapped.messages(), vec!["Email already registered".to_string()]);
    }

    #[test]
    fn other_database_errors_stay_opaque() {
        let error = sqlx::Error::Database(Box::new(StubDbError { unique: false }));
        let mapped = map_unique_violation(error);
        assert_eq!(mapped.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_database_errors_stay_opaque() {
        let mapped = map_unique_violation(sqlx::Error::RowNotFound);
        assert_eq!(mapped.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
