/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route tables into a single Axum router.
 *
 * # Assembly Order
 *
 * 1. Public routes
 * 2. Protected routes (merged; method routers on shared paths combine)
 * 3. Static image serving under `/images`
 * 4. Permissive CORS (the API is consumed cross-origin)
 * 5. Fallback handler for unknown routes
 */

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (config + optional database pool)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = public_routes()
        .merge(protected_routes(app_state.clone()))
        .nest_service("/images", ServeDir::new(app_state.config.images_dir()))
        .layer(CorsLayer::permissive())
        .fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::AppConfig;
    use axum_test::TestServer;
    use std::path::PathBuf;

    fn test_server() -> TestServer {
        let app_state = AppState {
            config: AppConfig {
                port: 3000,
                app_url: "http://localhost".to_string(),
                uploads_dir: PathBuf::from("uploads"),
            },
            db_pool: None,
        };
        TestServer::new(create_router(app_state)).unwrap()
    }

    #[tokio::test]
    async fn test_liveness_probe() {
        let server = test_server();
        let response = server.get("/test").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "errors": false, "data": "ok" }));
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back() {
        let server = test_server();
        let response = server.get("/definitely-not-a-route").await;
        response.assert_text("404 Not Found");
    }

    #[tokio::test]
    async fn test_protected_routes_require_a_token() {
        let server = test_server();
        for (method, path) in [
            ("GET", "/auth/me"),
            ("GET", "/users"),
            ("PUT", "/users"),
            ("PUT", "/users/image"),
            ("POST", "/publications"),
            ("POST", "/comments"),
        ] {
            let response = match method {
                "GET" => server.get(path).await,
                "PUT" => server.put(path).await,
                _ => server.post(path).await,
            };
            response.assert_status_unauthorized();
        }
    }
}
