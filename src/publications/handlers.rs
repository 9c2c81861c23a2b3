/**
 * Publication Handlers
 *
 * HTTP handlers for the `/publications` endpoints. Creation and updates
 * require authentication; listing and show are public. List and show
 * responses eagerly include the owner's public summary and the
 * publication's comments.
 */

use std::collections::HashMap;

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::comments::db::get_comments_for_publications;
use crate::comments::model::Comment;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::publications::db;
use crate::publications::model::{PublicationOwner, PublicationResponse};
use crate::server::state::AppState;
use crate::uploads;
use crate::validate;

/// Body for `POST /publications`
#[derive(Deserialize, Debug)]
pub struct StorePublicationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Body for `PUT /publications/{id}`
#[derive(Deserialize, Debug)]
pub struct UpdatePublicationRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Create a publication owned by the authenticated user
pub async fn store(
    AuthUser(auth): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<StorePublicationRequest>,
) -> Result<Json<PublicationResponse>, ApiError> {
    let errors = validate::publication_errors(&request.title, &request.content);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let pool = state.pool()?;

    let publication =
        db::create_publication(pool, auth.user_id, &request.title, &request.content).await?;

    tracing::info!("Publication created: {} by {}", publication.id, auth.user_id);

    Ok(Json(publication.to_response(&state.config)))
}

/// List all publications with owner and comments included
pub async fn index(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicationResponse>>, ApiError> {
    let pool = state.pool()?;

    let rows = db::list_publications_with_owner(pool).await?;

    let ids: Vec<Uuid> = rows.iter().map(|(publication, _)| publication.id).collect();
    let mut comments_by_publication = group_by_publication(
        get_comments_for_publications(pool, &ids).await?,
    );

    let publications = rows
        .into_iter()
        .map(|(publication, owner)| {
            let comments = comments_by_publication
                .remove(&publication.id)
                .unwrap_or_default();
            let owner = PublicationOwner {
                id: owner.id,
                name: owner.name,
                url: state.config.image_url("users", &owner.image),
            };
            publication.to_response_with_includes(&state.config, owner, comments)
        })
        .collect();

    Ok(Json(publications))
}

/// Show a single publication with owner and comments included
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicationResponse>, ApiError> {
    let pool = state.pool()?;

    let (publication, owner) = db::get_publication_with_owner(pool, id)
        .await?
        .ok_or_else(|| ApiError::bad_request("Publication not found"))?;

    let comments = get_comments_for_publications(pool, &[publication.id]).await?;
    let owner = PublicationOwner {
        id: owner.id,
        name: owner.name,
        url: state.config.image_url("users", &owner.image),
    };

    Ok(Json(publication.to_response_with_includes(
        &state.config,
        owner,
        comments,
    )))
}

/// Update a publication's title and/or content
pub async fn update(
    AuthUser(_auth): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePublicationRequest>,
) -> Result<Json<PublicationResponse>, ApiError> {
    // Only validate the fields the request actually carries.
    let errors: Vec<String> = request
        .title
        .as_deref()
        .and_then(validate::title_error)
        .into_iter()
        .chain(request.content.as_deref().and_then(validate::content_error))
        .collect();
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let pool = state.pool()?;

    let publication = db::update_publication(
        pool,
        id,
        request.title.as_deref(),
        request.content.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::bad_request("Publication not found"))?;

    tracing::info!("Publication updated: {}", publication.id);

    Ok(Json(publication.to_response(&state.config)))
}

/// Upload a publication image
///
/// Same multipart path as the user image endpoint, stored under the
/// publications directory.
pub async fn update_image(
    AuthUser(_auth): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<PublicationResponse>, ApiError> {
    let upload = uploads::read_image_field(multipart).await?;

    let pool = state.pool()?;

    let filename = uploads::store_image(
        &state.config.publication_images_dir(),
        &upload.original_name,
        &upload.bytes,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to store uploaded image: {:?}", e);
        ApiError::Internal
    })?;

    let publication = db::set_publication_image(pool, id, &filename)
        .await?
        .ok_or_else(|| ApiError::bad_request("Publication not found"))?;

    tracing::info!("Publication image updated: {} -> {}", publication.id, filename);

    Ok(Json(publication.to_response(&state.config)))
}

fn group_by_publication(comments: Vec<Comment>) -> HashMap<Uuid, Vec<Comment>> {
    let mut grouped: HashMap<Uuid, Vec<Comment>> = HashMap::new();
    for comment in comments {
        grouped.entry(comment.publication_id).or_default().push(comment);
    }
    grouped
}
