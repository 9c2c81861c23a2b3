//! Publications Module
//!
//! Publication (post) data model, database operations and HTTP handlers:
//!
//! - `POST /publications` - Create a publication (requires auth)
//! - `GET /publications` - List with owner and comments included
//! - `GET /publications/{id}` - Single publication with includes
//! - `PUT /publications/{id}` - Update title/content (requires auth)
//! - `PUT /publications/{id}/image` - Upload an image (requires auth)

/// Publication data model and response shapes
pub mod model;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use model::{Publication, PublicationOwner, PublicationResponse};
