//! Domain error to HTTP response mapping

use actix_web::HttpResponse;

use mh_core::errors::{AuthError, DomainError};
use mh_shared::types::{error_codes, ErrorResponse};

/// Handle domain errors and convert them to the appropriate HTTP
/// response
///
/// Each typed error maps to a fixed status and a stable machine-readable
/// code; store failures always fail closed as 500.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    log::error!("Domain Error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(_) => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::INVALID_ACCESS_TOKEN,
            "Invalid access token",
        )),
        DomainError::Store { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::SERVER_ERROR,
                "Internal server error",
            ))
        }
    }
}

fn handle_auth_error(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::NoAuthorizationHeader => HttpResponse::Unauthorized().json(
            ErrorResponse::new(
                error_codes::NO_AUTHORIZATION_HEADER,
                "Authorization header missing or malformed",
            ),
        ),
        AuthError::InvalidAccessToken => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::INVALID_ACCESS_TOKEN,
            "Invalid access token",
        )),
        AuthError::AccessTokenNotExpired => HttpResponse::Unauthorized().json(
            ErrorResponse::new(
                error_codes::ACCESS_TOKEN_NOT_EXPIRED,
                "Access token has not expired yet",
            ),
        ),
        AuthError::TokenRevoked => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::TOKEN_REVOKED,
            "Token has been revoked",
        )),
        AuthError::RefreshTokenNotExist => HttpResponse::Unauthorized().json(
            ErrorResponse::new(
                error_codes::REFRESH_TOKEN_NOT_EXIST,
                "Refresh token cookie missing",
            ),
        ),
        AuthError::InvalidRefreshToken => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::INVALID_REFRESH_TOKEN,
            "Invalid refresh token",
        )),
        AuthError::ResourceNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::RESOURCE_NOT_FOUND,
            "Resource not found",
        )),
        AuthError::Forbidden => HttpResponse::Forbidden().json(ErrorResponse::new(
            error_codes::FORBIDDEN,
            "Insufficient permissions",
        )),
    }
}
