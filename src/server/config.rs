/**
 * Server Configuration
 *
 * This module handles loading server configuration from the environment,
 * including the optional PostgreSQL database connection.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development:
 *
 * - `SERVER_PORT` - Port to listen on (default 3000)
 * - `APP_URL` - Public base URL used to build image links
 *   (default `http://localhost`)
 * - `UPLOADS_DIR` - Directory for uploaded images (default `uploads`)
 * - `DATABASE_URL` - PostgreSQL connection string
 * - `JWT_SECRET` - Token signing secret (read in the sessions module)
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Without a database the server still serves requests; data endpoints
 * fail with the uniform 500 shape.
 */

use std::path::{Path, PathBuf};

use sqlx::PgPool;

/// Application configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Public base URL (scheme + host, no port)
    pub app_url: String,
    /// Root directory for uploaded files
    pub uploads_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let app_url =
            std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost".to_string());

        let uploads_dir = std::env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        Self {
            port,
            app_url,
            uploads_dir,
        }
    }

    /// Public base for image URLs, e.g. `http://localhost:3000`
    pub fn public_base(&self) -> String {
        format!("{}:{}", self.app_url, self.port)
    }

    /// Directory for user profile images
    pub fn user_images_dir(&self) -> PathBuf {
        self.uploads_dir.join("images").join("users")
    }

    /// Directory for publication images
    pub fn publication_images_dir(&self) -> PathBuf {
        self.uploads_dir.join("images").join("publications")
    }

    /// Directory served under `/images`
    pub fn images_dir(&self) -> PathBuf {
        self.uploads_dir.join("images")
    }

    /// Build the public URL for a stored image filename
    ///
    /// Returns `None` when no image has been stored yet.
    pub fn image_url(&self, subdir: &str, image: &str) -> Option<String> {
        if image.is_empty() {
            return None;
        }
        Some(format!("{}/images/{}/{}", self.public_base(), subdir, image))
    }
}

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if database is successfully configured
/// - `None` if `DATABASE_URL` is not set or connection fails
///
/// Errors are logged but do not prevent server startup.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            // Continue anyway - migrations might have already been run
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Create the image upload directories if they do not exist
pub async fn ensure_upload_dirs(config: &AppConfig) -> std::io::Result<()> {
    ensure_dir(&config.user_images_dir()).await?;
    ensure_dir(&config.publication_images_dir()).await?;
    Ok(())
}

async fn ensure_dir(path: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(path).await
}
