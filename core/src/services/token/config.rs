//! Configuration for the token services

use mh_shared::config::JwtConfig;

/// Configuration shared by the token codec, issuer, reissue coordinator,
/// and revocation service
///
/// Constructed once at startup and passed in explicitly; the signing key
/// never lives in process-wide mutable state.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret
    pub secret: String,
    /// Issuer claim stamped into every token
    pub issuer: String,
    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
    /// Remaining-validity threshold (seconds) below which reissue
    /// rotates the refresh token
    pub rotation_threshold: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::from(JwtConfig::default())
    }
}

impl From<JwtConfig> for TokenConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            issuer: config.issuer,
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
            rotation_threshold: config.rotation_threshold,
        }
    }
}
