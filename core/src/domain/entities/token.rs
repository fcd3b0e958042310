//! Token entities for JWT-based authentication.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// Claims structure for the JWT payload
///
/// Access tokens carry `sub` (string-encoded user id) and `auth` (single
/// role string); refresh tokens are anonymous and carry neither. The
/// signature and expiry are the only server-side truth for access
/// tokens; refresh tokens are additionally checked against the value
/// stored in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (string-encoded user id); absent on refresh tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Single authority string (e.g. "ROLE_USER"); absent on refresh tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp (epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (epoch seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access(user_id: i64, authority: &str, issuer: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: Some(user_id.to_string()),
            auth: Some(authority.to_string()),
            iss: issuer.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Creates new anonymous claims, used for refresh tokens
    pub fn new_anonymous(issuer: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: None,
            auth: None,
            iss: issuer.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Remaining validity in seconds (zero when already expired)
    pub fn remaining_validity(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }

    /// Gets the user id from the subject claim
    pub fn user_id(&self) -> Result<i64, TokenError> {
        let sub = self.sub.as_deref().ok_or(TokenError::MissingClaim {
            claim: "sub".to_string(),
        })?;
        sub.parse().map_err(|_| TokenError::Malformed)
    }

    /// Gets the authority claim
    pub fn authority(&self) -> Result<&str, TokenError> {
        self.auth.as_deref().ok_or(TokenError::MissingClaim {
            claim: "auth".to_string(),
        })
    }
}

/// Token pair handed to the client after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token (cookie-only, opaque to the client)
    pub refresh_token: String,

    /// Access token expiry as epoch seconds
    pub access_expires_at: i64,

    /// Subject the pair was issued to
    pub user_id: i64,
}
