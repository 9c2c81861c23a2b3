/**
 * Comment Model
 *
 * Comments carry no derived fields, so the row type doubles as the
 * response representation.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment on a publication
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID (UUID)
    pub id: Uuid,
    /// Author reference
    pub user_id: Uuid,
    /// Publication this comment belongs to
    pub publication_id: Uuid,
    /// Content (3-255 chars)
    pub content: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}
