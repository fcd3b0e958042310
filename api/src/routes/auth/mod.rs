//! Authentication route handlers
//!
//! This module contains the session lifecycle endpoints:
//! - Token issuance after OAuth2 identity verification
//! - Access token reissue against the refresh-token cookie
//! - Logout
//!
//! The refresh token travels exclusively in a dedicated HTTP-only
//! cookie built here.

pub mod login;
pub mod logout;
pub mod reissue;

use actix_web::cookie::{time::Duration, Cookie};

use mh_shared::config::CookieConfig;

/// Builds the refresh-token cookie set on login and rotation
pub(crate) fn refresh_cookie(
    config: &CookieConfig,
    value: &str,
    max_age_seconds: i64,
) -> Cookie<'static> {
    let mut builder = Cookie::build(config.name.clone(), value.to_string())
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .max_age(Duration::seconds(max_age_seconds));

    if let Some(domain) = &config.domain {
        builder = builder.domain(domain.clone());
    }

    builder.finish()
}

/// Builds the expired cookie that deletes the refresh token on logout
pub(crate) fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut builder = Cookie::build(config.name.clone(), String::new())
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .max_age(Duration::ZERO);

    if let Some(domain) = &config.domain {
        builder = builder.domain(domain.clone());
    }

    builder.finish()
}
