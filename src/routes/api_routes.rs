/**
 * API Route Tables
 *
 * This module defines the public and protected route tables.
 *
 * # Routes
 *
 * ## Public
 * - `GET /test` - Liveness probe
 * - `POST /auth/login` - User login, returns a JWT token
 * - `POST /auth/register` - User registration
 * - `POST /users` - Create a user
 * - `GET /publications`, `GET /publications/{id}` - Browse publications
 * - `GET /comments`, `GET /comments/{id}` - Browse comments
 *
 * ## Protected (Bearer token required)
 * - `GET /auth/me` - Current user info
 * - `GET /users` - List users
 * - `PUT /users` - Update own record
 * - `PUT /users/image` - Upload profile image
 * - `POST /publications`, `PUT /publications/{id}`,
 *   `PUT /publications/{id}/image`
 * - `POST /comments`, `PUT /comments/{id}`
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};

use crate::auth::handlers::{login, me, register};
use crate::comments::handlers as comments;
use crate::middleware::auth::auth_middleware;
use crate::publications::handlers as publications;
use crate::server::state::AppState;
use crate::users::handlers as users;

/// Liveness probe kept from the original API surface
async fn test() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "errors": false,
        "data": "ok",
    }))
}

/// Routes that do not require authentication
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(test))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/users", post(users::store))
        .route("/publications", get(publications::index))
        .route("/publications/{id}", get(publications::show))
        .route("/comments", get(comments::index))
        .route("/comments/{id}", get(comments::show))
}

/// Routes behind the authentication middleware
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me))
        .route("/users", get(users::index).put(users::update))
        .route("/users/image", put(users::update_image))
        .route("/publications", post(publications::store))
        .route("/publications/{id}", put(publications::update))
        .route("/publications/{id}/image", put(publications::update_image))
        .route("/comments", post(comments::store))
        .route("/comments/{id}", put(comments::update))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}
