//! Database operations for users

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::users::model::{User, UserSummary};

/// Create a new user
///
/// The caller is responsible for hashing the password.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, image, created_at, updated_at)
        VALUES ($1, $2, $3, $4, '', $5, $6)
        RETURNING id, name, email, password_hash, image, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, image, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, image, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all users with public attributes only
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id, name, email
        FROM users
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Update a user's name, email and (optionally) password hash
///
/// When `password_hash` is `None` the stored hash is left untouched.
pub async fn update_user(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    email: &str,
    password_hash: Option<&str>,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = $1, email = $2, password_hash = COALESCE($3, password_hash), updated_at = $4
        WHERE id = $5
        RETURNING id, name, email, password_hash, image, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Set a user's stored image filename
pub async fn set_user_image(pool: &PgPool, id: Uuid, image: &str) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET image = $1, updated_at = $2
        WHERE id = $3
        RETURNING id, name, email, password_hash, image, created_at, updated_at
        "#,
    )
    .bind(image)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await
}
