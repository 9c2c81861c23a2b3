//! Authentication Handlers
//!
//! HTTP handlers for the `/auth` endpoints:
//!
//! - `POST /auth/register` - User registration
//! - `POST /auth/login` - User authentication, returns a JWT token
//! - `GET /auth/me` - Current user info (requires a valid token)

/// Request/response types shared by the handlers
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::me;
pub use register::register;
