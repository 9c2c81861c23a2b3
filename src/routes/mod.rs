//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── api_routes.rs   - Public and protected API route tables
//! └── router.rs       - Router assembly (static files, CORS, fallback)
//! ```

/// API route configuration
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
