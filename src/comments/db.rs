//! Database operations for comments

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::comments::model::Comment;

/// Create a new comment by `user_id` on `publication_id`
pub async fn create_comment(
    pool: &PgPool,
    user_id: Uuid,
    publication_id: Uuid,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, user_id, publication_id, content, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, publication_id, content, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(publication_id)
    .bind(content)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a comment by ID
pub async fn get_comment_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, user_id, publication_id, content, created_at, updated_at
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all comments
pub async fn list_comments(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, user_id, publication_id, content, created_at, updated_at
        FROM comments
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get the comments of a set of publications
///
/// Used to build the eager include on publication listings.
pub async fn get_comments_for_publications(
    pool: &PgPool,
    publication_ids: &[Uuid],
) -> Result<Vec<Comment>, sqlx::Error> {
    if publication_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, user_id, publication_id, content, created_at, updated_at
        FROM comments
        WHERE publication_id = ANY($1)
        ORDER BY created_at
        "#,
    )
    .bind(publication_ids)
    .fetch_all(pool)
    .await
}

/// Update a comment's content
pub async fn update_comment(
    pool: &PgPool,
    id: Uuid,
    content: &str,
) -> Result<Option<Comment>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET content = $1, updated_at = $2
        WHERE id = $3
        RETURNING id, user_id, publication_id, content, created_at, updated_at
        "#,
    )
    .bind(content)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}
