//! Database operations for publications
//!
//! Listing joins the owner row so the handlers can build the eager
//! include without a second round trip per publication.

use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::publications::model::Publication;

/// Owner columns selected alongside a publication
#[derive(Debug, Clone)]
pub struct OwnerRow {
    pub id: Uuid,
    pub name: String,
    pub image: String,
}

/// Create a new publication owned by `user_id`
pub async fn create_publication(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Publication, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Publication>(
        r#"
        INSERT INTO publications (id, user_id, title, content, image, created_at, updated_at)
        VALUES ($1, $2, $3, $4, '', $5, $6)
        RETURNING id, user_id, title, content, image, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a publication by ID
pub async fn get_publication_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Publication>, sqlx::Error> {
    sqlx::query_as::<_, Publication>(
        r#"
        SELECT id, user_id, title, content, image, created_at, updated_at
        FROM publications
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all publications joined with their owners
pub async fn list_publications_with_owner(
    pool: &PgPool,
) -> Result<Vec<(Publication, OwnerRow)>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.user_id, p.title, p.content, p.image, p.created_at, p.updated_at,
               u.name AS owner_name, u.image AS owner_image
        FROM publications p
        JOIN users u ON u.id = p.user_id
        ORDER BY p.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let publication = Publication {
                id: row.get("id"),
                user_id: row.get("user_id"),
                title: row.get("title"),
                content: row.get("content"),
                image: row.get("image"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            };
            let owner = OwnerRow {
                id: publication.user_id,
                name: row.get("owner_name"),
                image: row.get("owner_image"),
            };
            (publication, owner)
        })
        .collect())
}

/// Get a publication by ID joined with its owner
pub async fn get_publication_with_owner(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<(Publication, OwnerRow)>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT p.id, p.user_id, p.title, p.content, p.image, p.created_at, p.updated_at,
               u.name AS owner_name, u.image AS owner_image
        FROM publications p
        JOIN users u ON u.id = p.user_id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| {
        let publication = Publication {
            id: row.get("id"),
            user_id: row.get("user_id"),
            title: row.get("title"),
            content: row.get("content"),
            image: row.get("image"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        };
        let owner = OwnerRow {
            id: publication.user_id,
            name: row.get("owner_name"),
            image: row.get("owner_image"),
        };
        (publication, owner)
    }))
}

/// Update a publication's title and content
///
/// Absent fields keep their stored values.
pub async fn update_publication(
    pool: &PgPool,
    id: Uuid,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<Option<Publication>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Publication>(
        r#"
        UPDATE publications
        SET title = COALESCE($1, title), content = COALESCE($2, content), updated_at = $3
        WHERE id = $4
        RETURNING id, user_id, title, content, image, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Set a publication's stored image filename
pub async fn set_publication_image(
    pool: &PgPool,
    id: Uuid,
    image: &str,
) -> Result<Option<Publication>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Publication>(
        r#"
        UPDATE publications
        SET image = $1, updated_at = $2
        WHERE id = $3
        RETURNING id, user_id, title, content, image, created_at, updated_at
        "#,
    )
    .bind(image)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}
