/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and attaches the user's identity to the request.
 *
 * # Rejections
 *
 * * Missing `Authorization` header → 401 `Token not found`
 * * Malformed header, invalid/expired token, or a token whose user no
 *   longer exists → 401 `Token is invalid`
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::get_user_by_id;

/// Authenticated user data extracted from a verified JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies the token
/// 3. Confirms the referenced user still exists
/// 4. Attaches the identity to request extensions for use in handlers
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Token not found")
        })?;

    // Format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthorized("Token is invalid")
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthorized("Token is invalid")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("Invalid user ID in token: {:?}", e);
        ApiError::unauthorized("Token is invalid")
    })?;

    // Fail closed when the token references a deleted user.
    if let Some(pool) = &app_state.db_pool {
        let exists = get_user_by_id(pool, user_id).await?.is_some();
        if !exists {
            tracing::warn!("Token references unknown user: {}", user_id);
            return Err(ApiError::unauthorized("Token is invalid"));
        }
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes behind [`auth_middleware`] to
/// obtain the identity attached by the middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("Token not found")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::create_token;
    use crate::server::config::AppConfig;
    use axum::{middleware, routing::get, Router};
    use axum_test::TestServer;

    fn test_state() -> AppState {
        AppState {
            config: AppConfig {
                port: 3000,
                app_url: "http://localhost".to_string(),
                uploads_dir: std::path::PathBuf::from("uploads"),
            },
            db_pool: None,
        }
    }

    fn test_router() -> TestServer {
        let state = test_state();
        let app: Router = Router::new()
            .route(
                "/whoami",
                get(|AuthUser(user): AuthUser| async move { user.email }),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state);

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let server = test_router();
        let response = server.get("/whoami").await;
        response.assert_status_unauthorized();
        response.assert_json(&serde_json::json!({ "errors": ["Token not found"] }));
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let server = test_router();
        let response = server
            .get("/whoami")
            .authorization_bearer("not.a.token")
            .await;
        response.assert_status_unauthorized();
        response.assert_json(&serde_json::json!({ "errors": ["Token is invalid"] }));
    }

    #[tokio::test]
    async fn test_wrong_scheme_is_rejected() {
        let server = test_router();
        let response = server
            .get("/whoami")
            .authorization("Basic dXNlcjpwYXNz")
            .await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_valid_token_resolves_identity() {
        let server = test_router();
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, "wesley@email.com".to_string()).unwrap();

        let response = server.get("/whoami").authorization_bearer(&token).await;
        response.assert_status_ok();
        response.assert_text("wesley@email.com");
    }
}
