//! Error rendering for requests rejected at the edge

use actix_web::HttpResponse;

use mh_core::errors::{AuthError, DomainError};
use mh_shared::types::{error_codes, ErrorResponse};

/// Renders a domain error as the gateway's short-circuit response
///
/// Each typed error maps to a fixed status and a stable machine-readable
/// code. Store failures always land on 500: the gateway fails closed
/// rather than admit a potentially-revoked token.
pub fn render_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => render_auth_error(auth_error),
        DomainError::Token(_) => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::INVALID_ACCESS_TOKEN,
            "Invalid access token",
        )),
        DomainError::Store { .. } | DomainError::Internal { .. } => HttpResponse::InternalServerError()
            .json(ErrorResponse::new(
                error_codes::SERVER_ERROR,
                "Internal server error",
            )),
    }
}

fn render_auth_error(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::NoAuthorizationHeader => HttpResponse::Unauthorized().json(
            ErrorResponse::new(
                error_codes::NO_AUTHORIZATION_HEADER,
                "Authorization header missing or malformed",
            ),
        ),
        AuthError::InvalidAccessToken | AuthError::AccessTokenNotExpired => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(
                error_codes::INVALID_ACCESS_TOKEN,
                "Invalid access token",
            ))
        }
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
