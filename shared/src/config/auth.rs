//! Authentication and session configuration

use serde::{Deserialize, Serialize};

/// JWT session configuration
///
/// Carries the signing secret and the lifetimes that govern the token
/// lifecycle. Passed explicitly into the token services at construction;
/// there is no process-wide signing state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used to sign and verify tokens
    pub secret: String,

    /// Issuer claim stamped into every token
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,

    /// Remaining-validity threshold (seconds) below which a refresh
    /// token is rotated during reissue
    #[serde(default = "default_rotation_threshold")]
    pub rotation_threshold: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            issuer: default_issuer(),
            access_token_expiry: 1800,      // 30 minutes
            refresh_token_expiry: 604800,   // 7 days
            rotation_threshold: default_rotation_threshold(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1800);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(604800);
        let rotation_threshold = std::env::var("JWT_ROTATION_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_rotation_threshold);

        Self {
            secret,
            issuer: default_issuer(),
            access_token_expiry,
            refresh_token_expiry,
            rotation_threshold,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Set the rotation threshold in days
    pub fn with_rotation_threshold_days(mut self, days: i64) -> Self {
        self.rotation_threshold = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// Refresh-token cookie configuration
///
/// The refresh token travels only in a dedicated HTTP-only cookie scoped
/// to the reissue/logout endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name carrying the refresh token
    pub name: String,

    /// Cookie domain, derived from the client redirect target
    #[serde(default)]
    pub domain: Option<String>,

    /// Secure flag (HTTPS only)
    #[serde(default)]
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refresh_token"),
            domain: None,
            secure: false, // set to true in production
        }
    }
}

impl CookieConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            name: std::env::var("REFRESH_COOKIE_NAME")
                .unwrap_or_else(|_| "refresh_token".to_string()),
            domain: std::env::var("REFRESH_COOKIE_DOMAIN").ok(),
            secure: std::env::var("REFRESH_COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Set the cookie domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

fn default_issuer() -> String {
    String::from("meethub")
}

fn default_rotation_threshold() -> i64 {
    86400 // 1 day
}
