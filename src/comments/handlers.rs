/**
 * Comment Handlers
 *
 * HTTP handlers for the `/comments` endpoints. Creation and updates
 * require authentication; listing and show are public. A comment can
 * only be created against a publication that exists.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::comments::db;
use crate::comments::model::Comment;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::publications::db::get_publication_by_id;
use crate::server::state::AppState;
use crate::validate;

/// Body for `POST /comments`
///
/// `publication_id` is taken as a string so that a missing or malformed
/// id answers with the uniform error shape instead of a rejected
/// deserialization.
#[derive(Deserialize, Debug)]
pub struct StoreCommentRequest {
    #[serde(default)]
    pub publication_id: String,
    #[serde(default)]
    pub content: String,
}

/// Body for `PUT /comments/{id}`
#[derive(Deserialize, Debug)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    pub content: String,
}

/// Create a comment on an existing publication
pub async fn store(
    AuthUser(auth): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<StoreCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    let errors = validate::comment_errors(&request.content);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let publication_id = Uuid::parse_str(&request.publication_id)
        .map_err(|_| ApiError::bad_request("Publication not found"))?;

    let pool = state.pool()?;

    // The publication must exist; a dangling comment is never created.
    if get_publication_by_id(pool, publication_id).await?.is_none() {
        return Err(ApiError::bad_request("Publication not found"));
    }

    let comment =
        db::create_comment(pool, auth.user_id, publication_id, &request.content).await?;

    tracing::info!("Comment created: {} by {}", comment.id, auth.user_id);

    Ok(Json(comment))
}

/// List all comments
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, ApiError> {
    let pool = state.pool()?;
    let comments = db::list_comments(pool).await?;
    Ok(Json(comments))
}

/// Show a single comment
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Comment>, ApiError> {
    let pool = state.pool()?;

    let comment = db::get_comment_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::bad_request("Comment not found"))?;

    Ok(Json(comment))
}

/// Update a comment's content
pub async fn update(
    AuthUser(_auth): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    let errors = validate::comment_errors(&request.content);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let pool = state.pool()?;

    let comment = db::update_comment(pool, id, &request.content)
        .await?
        .ok_or_else(|| ApiError::bad_request("Comment not found"))?;

    tracing::info!("Comment updated: {}", comment.id);

    Ok(Json(comment))
}
