/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * `AppState` is cloned per request. `PgPool` is internally reference
 * counted, and `AppConfig` is a small immutable value, so cloning is cheap.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Application state shared by all request handlers
///
/// # Fields
///
/// * `config` - Server configuration (port, public URL, uploads directory)
/// * `db_pool` - Optional PostgreSQL connection pool. `None` when
///   `DATABASE_URL` is not configured; handlers fail with the uniform
///   500 shape in that case.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: AppConfig,

    /// Database connection pool
    ///
    /// This is `None` if the database is not configured. Handlers obtain
    /// the pool through [`AppState::pool`] which maps the missing pool to
    /// an opaque error.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Get the database pool, or fail with an opaque internal error
    pub fn pool(&self) -> Result<&PgPool, ApiError> {
        self.db_pool.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            ApiError::Internal
        })
    }
}

/// Allow handlers to extract the configuration directly
impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// Allow handlers to extract the optional database pool directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
