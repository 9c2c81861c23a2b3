/**
 * User Handlers
 *
 * HTTP handlers for the `/users` endpoints:
 *
 * - `GET /users` - List users (public attributes only)
 * - `POST /users` - Create a user (same semantics as registration)
 * - `PUT /users` - Update the authenticated user's own record
 * - `PUT /users/image` - Upload a profile image (multipart)
 *
 * The update endpoints operate on the identity attached by the auth
 * middleware; there is no way to modify another user's record.
 */

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use bcrypt::{hash, DEFAULT_COST};
use serde::Deserialize;

use crate::auth::handlers::register::{create_user_record, map_unique_violation};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::uploads;
use crate::users::db;
use crate::users::model::{UserResponse, UserSummary};
use crate::validate;

/// Body for `POST /users`
#[derive(Deserialize, Debug)]
pub struct StoreUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body for `PUT /users`
///
/// Absent fields keep their stored values; the password is only re-hashed
/// when a plaintext password is supplied.
#[derive(Deserialize, Debug)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// List users with public attributes only
pub async fn index(
    AuthUser(_auth): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let pool = state.pool()?;
    let users = db::list_users(pool).await?;
    Ok(Json(users))
}

/// Create a user
///
/// Same validation and duplicate-email handling as registration.
pub async fn store(
    State(state): State<AppState>,
    Json(request): Json<StoreUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user =
        create_user_record(&state, &request.name, &request.email, &request.password).await?;
    Ok(Json(user))
}

/// Update the authenticated user's own record
pub async fn update(
    AuthUser(auth): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = state.pool()?;

    let current = db::get_user_by_id(pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::bad_request("User not found"))?;

    let current_email = current.email.clone();
    let name = request.name.unwrap_or(current.name);
    let email = request.email.unwrap_or(current.email);

    let errors = validate::user_errors(&name, &email, request.password.as_deref());
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    if email != current_email && db::get_user_by_email(pool, &email).await?.is_some() {
        return Err(ApiError::validation(vec![
            "Email already registered".to_string(),
        ]));
    }

    let password_hash = match request.password.as_deref() {
        Some(password) => Some(hash(password, DEFAULT_COST)?),
        None => None,
    };

    // A concurrent email change can slip past the pre-check; the unique
    // index answers with the same duplicate-email shape.
    let user = db::update_user(pool, auth.user_id, &name, &email, password_hash.as_deref())
        .await
        .map_err(map_unique_violation)?;

    tracing::info!("User updated: {}", user.id);

    Ok(Json(user.to_response(&state.config)))
}

/// Upload a profile image
///
/// Multipart body with a `file` field; png/jpeg/jpg only. The file is
/// written to disk before the row update, and is left behind if that
/// update fails.
pub async fn update_image(
    AuthUser(auth): AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UserResponse>, ApiError> {
    let upload = uploads::read_image_field(multipart).await?;

    let pool = state.pool()?;

    let filename = uploads::store_image(
        &state.config.user_images_dir(),
        &upload.original_name,
        &upload.bytes,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to store uploaded image: {:?}", e);
        ApiError::Internal
    })?;

    let user = db::set_user_image(pool, auth.user_id, &filename).await?;

    tracing::info!("User image updated: {} -> {}", user.id, filename);

    Ok(Json(user.to_response(&state.config)))
}
