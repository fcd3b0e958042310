//! Domain-specific error types for the session lifecycle.
//!
//! Each variant maps to a fixed HTTP status and a stable machine-readable
//! code at the presentation layer; errors are terminal within a request
//! (no retries on the request path).

use thiserror::Error;

/// Token codec errors
///
/// Produced by signature/structure/expiry checks in the codec. Callers
/// translate these into the request-level [`AuthError`] variants.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    SignatureInvalid,

    #[error("Malformed token")]
    Malformed,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Request-level authentication and authorization errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header missing or malformed")]
    NoAuthorizationHeader,

    #[error("Invalid access token")]
    InvalidAccessToken,

    #[error("Access token has not expired yet")]
    AccessTokenNotExpired,

    #[error("Token has been revoked")]
    TokenRevoked,

    #[error("Refresh token cookie missing")]
    RefreshTokenNotExist,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Resource not found")]
    ResourceNotFound,

    #[error("Insufficient permissions for resource")]
    Forbidden,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Session store unreachable, timed out, or returned a transport
    /// error. Always fails closed at the perimeter.
    #[error("Session store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
