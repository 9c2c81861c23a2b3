/**
 * Publication Model
 *
 * This module defines the publication row type and the representations
 * returned to clients. List and show responses eagerly include the
 * owner's public summary and the publication's comments; create and
 * update responses return the bare record.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comments::model::Comment;
use crate::server::config::AppConfig;

/// Publication row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Publication {
    /// Unique publication ID (UUID)
    pub id: Uuid,
    /// Owner reference
    pub user_id: Uuid,
    /// Title (3-50 chars)
    pub title: String,
    /// Content (3-255 chars)
    pub content: String,
    /// Stored image filename, empty when no image has been uploaded
    pub image: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl Publication {
    /// Public URL of the attached image, `None` when no image is set
    pub fn image_url(&self, config: &AppConfig) -> Option<String> {
        config.image_url("publications", &self.image)
    }

    /// Bare representation without includes (create/update responses)
    pub fn to_response(&self, config: &AppConfig) -> PublicationResponse {
        PublicationResponse {
            id: self.id,
            user_id: self.user_id,
            title: self.title.clone(),
            content: self.content.clone(),
            url: self.image_url(config),
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: None,
            comments: None,
        }
    }

    /// Representation with the owner summary and comments included
    pub fn to_response_with_includes(
        &self,
        config: &AppConfig,
        owner: PublicationOwner,
        comments: Vec<Comment>,
    ) -> PublicationResponse {
        let mut response = self.to_response(config);
        response.user = Some(owner);
        response.comments = Some(comments);
        response
    }
}

/// Owner summary included in publication listings
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicationOwner {
    pub id: Uuid,
    pub name: String,
    /// Public URL of the owner's profile image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Publication representation returned to clients
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    /// Public URL of the attached image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Owner summary, present on list/show responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicationOwner>,
    /// Comments, present on list/show responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}
