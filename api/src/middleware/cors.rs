//! CORS middleware configuration for cross-origin requests.
//!
//! The refresh-token cookie only travels when credentials are allowed,
//! so the configuration is environment-aware: permissive in development
//! and restricted to configured origins in production.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current
/// environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins
///   (production only)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    if environment == "production" {
        create_production_cors()
    } else {
        create_development_cors()
    }
}

fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .supports_credentials()
        .max_age(3600)
}

fn create_production_cors() -> Cors {
    log::info!("Configuring CORS for production environment");

    let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in allowed_origins.split(',').filter(|o| !o.is_empty()) {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}
