//! API Error Types
//!
//! This module defines the error type shared by all HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Error Categories
//!
//! - Validation errors (bad input, length bounds, duplicate email) → 400
//! - Authentication errors (missing/invalid token, bad credentials) → 401
//! - Everything unexpected (database, hashing, token signing) → 500
//!
//! # Response Format
//!
//! Every error is rendered as JSON with a uniform shape:
//!
//! ```json
//! {
//!   "errors": ["Error message"]
//! }
//! ```

/// Error type definitions
pub mod types;

/// Conversion of errors into HTTP responses
pub mod conversion;

pub use types::ApiError;
