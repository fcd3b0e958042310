//! Request handling helpers

pub mod error;

use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;

pub use error::handle_domain_error;

/// Extracts the bearer token from the Authorization header
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
