//! Middleware Module
//!
//! Request-processing middleware. Currently only token authentication.

/// JWT authentication middleware and the `AuthUser` extractor
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
