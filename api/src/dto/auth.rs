//! Request and response bodies for the session lifecycle endpoints

use serde::{Deserialize, Serialize};

/// Body for POST /auth/login
///
/// Filled in by the OAuth2 callback exchange once the external identity
/// has been verified; by this point the user id and role are facts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Verified user id
    pub user_id: i64,

    /// Role granted to the user (e.g. "ROLE_USER")
    pub authority: String,
}

/// Access token payload returned by login and reissue
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Signed access token
    pub access_token: String,

    /// Access token expiry as epoch seconds
    pub expires_at: i64,

    /// Subject the token was issued to
    pub user_id: i64,
}

/// Body for a successful POST /auth/logout
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}
