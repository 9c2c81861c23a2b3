/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication
 * handlers. Missing body fields default to empty strings so that presence
 * checks can produce the contract's error messages instead of a
 * deserialization failure.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's display name (3-50 chars)
    #[serde(default)]
    pub name: String,
    /// User's email address (unique)
    #[serde(default)]
    pub email: String,
    /// User's password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

/// Login response carrying the signed token
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT token for authentication (30-day expiration)
    pub access_token: String,
}
