//! Publica - Social Network Backend
//!
//! Publica is a small social-network backend built with Rust: user
//! registration and login, JWT-based authentication, user profile and
//! image management, publications (posts) with image attachments, and
//! comments on publications.
//!
//! # Overview
//!
//! This library provides:
//! - An Axum HTTP server with JSON endpoints
//! - JWT token issuance and verification (bcrypt password hashing)
//! - PostgreSQL persistence via sqlx with migrations
//! - Multipart image uploads with a MIME allow-list and randomized
//!   filenames, served back as static files
//!
//! # Module Structure
//!
//! - **`server`** - Initialization, application state, configuration
//! - **`routes`** - HTTP route tables and router assembly
//! - **`auth`** - Login, registration, token management
//! - **`middleware`** - Token verification middleware
//! - **`users`** / **`publications`** / **`comments`** - Domain modules
//!   (model, database operations, handlers)
//! - **`uploads`** - Multipart intake and disk storage
//! - **`validate`** - Write-time validation bounds
//! - **`error`** - The uniform `{"errors": [...]}` error type
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, ApiError>`; validation and auth
//! failures map to 400/401 with an `errors` array, everything unexpected
//! maps to an opaque 500.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and token management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// User management
pub mod users;

/// Publications (posts)
pub mod publications;

/// Comments on publications
pub mod comments;

/// Multipart upload intake and storage
pub mod uploads;

/// Write-time validation
pub mod validate;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
