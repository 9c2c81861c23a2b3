/**
 * User Model
 *
 * This module defines the user row type and the representations returned
 * to clients. The password hash never leaves the database layer: response
 * types carry only public attributes plus the derived image URL.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::config::AppConfig;

/// User row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name (3-50 chars)
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Stored image filename, empty when no image has been uploaded
    pub image: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Verify a plaintext password against the stored hash
    pub fn password_is_valid(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }

    /// Public URL of the profile image, `None` when no image is set
    pub fn image_url(&self, config: &AppConfig) -> Option<String> {
        config.image_url("users", &self.image)
    }

    /// Public representation returned by registration, `me` and updates
    pub fn to_response(&self, config: &AppConfig) -> UserResponse {
        UserResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            url: self.image_url(config),
        }
    }
}

/// User representation without sensitive data
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: Uuid,
    /// User's display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// Public URL of the profile image, absent when no image is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Minimal listing shape for `GET /users`
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn test_config() -> AppConfig {
        AppConfig {
            port: 3000,
            app_url: "http://localhost".to_string(),
            uploads_dir: PathBuf::from("uploads"),
        }
    }

    fn test_user(image: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Wesley Alves".to_string(),
            email: "wesley@email.com".to_string(),
            password_hash: "$2b$08$irrelevant".to_string(),
            image: image.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn response_excludes_password_hash() {
        let user = test_user("");
        let json = serde_json::to_value(user.to_response(&test_config())).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("url").is_none());
    }

    #[test]
    fn url_is_derived_from_image() {
        let user = test_user("1700000000_12345.png");
        let response = user.to_response(&test_config());
        assert_eq!(
            response.url.as_deref(),
            Some("http://localhost:3000/images/users/1700000000_12345.png")
        );
    }
}
