//! Shared error response structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error response structure used across all API endpoints
///
/// The `error` field carries a stable machine-readable code so clients
/// can distinguish "log in again" from "retry reissue" from
/// "insufficient permission"; the `message` field is human-readable.
/// Both the gateway and the authentication service render this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Machine-readable error codes for the session lifecycle
pub mod error_codes {
    pub const NO_AUTHORIZATION_HEADER: &str = "NO_AUTHORIZATION_HEADER";
    pub const INVALID_ACCESS_TOKEN: &str = "INVALID_ACCESS_TOKEN";
    pub const ACCESS_TOKEN_NOT_EXPIRED: &str = "ACCESS_TOKEN_NOT_EXPIRED";
    pub const TOKEN_REVOKED: &str = "TOKEN_REVOKED";
    pub const REFRESH_TOKEN_NOT_EXIST: &str = "REFRESH_TOKEN_NOT_EXIST";
    pub const INVALID_REFRESH_TOKEN: &str = "INVALID_REFRESH_TOKEN";
    pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let response = ErrorResponse::new(error_codes::TOKEN_REVOKED, "Token revoked");
        assert_eq!(response.error, "TOKEN_REVOKED");
        assert_eq!(response.message, "Token revoked");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new(error_codes::FORBIDDEN, "Forbidden");
        let json = serde_json::to_string(&response).unwrap();

        let deserialized: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.error, response.error);
        assert_eq!(deserialized.message, response.message);
    }
}
