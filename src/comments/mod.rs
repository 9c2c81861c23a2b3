//! Comments Module
//!
//! Comment data model, database operations and HTTP handlers:
//!
//! - `POST /comments` - Create a comment on an existing publication
//! - `GET /comments` - List all comments
//! - `GET /comments/{id}` - Single comment
//! - `PUT /comments/{id}` - Update content (requires auth)

/// Comment data model
pub mod model;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use model::Comment;
