/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: configuration, database pool, upload directories and the
 * router.
 *
 * # Error Handling
 *
 * Initialization is resilient:
 * - Missing database: server continues, data endpoints return 500
 * - Migration failures: logged but don't prevent startup
 * - Upload directory creation failures: logged, uploads will fail later
 */

use axum::Router;

use crate::routes::create_router;
use crate::server::config::{ensure_upload_dirs, load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Load the database pool (if `DATABASE_URL` is configured) and run
///    migrations
/// 2. Ensure the image upload directories exist
/// 3. Build the application state and the router
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing publica backend server");

    let db_pool = load_database().await;

    if let Err(e) = ensure_upload_dirs(&config).await {
        tracing::error!("Failed to create upload directories: {:?}", e);
    }

    let app_state = AppState { config, db_pool };

    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
