//! Users Module
//!
//! User data model, database operations and HTTP handlers:
//!
//! - `GET /users` - List users (public attributes only, requires auth)
//! - `POST /users` - Create a user (public)
//! - `PUT /users` - Update the authenticated user
//! - `PUT /users/image` - Upload a profile image (multipart)

/// User data model and response shapes
pub mod model;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use model::{User, UserResponse, UserSummary};
