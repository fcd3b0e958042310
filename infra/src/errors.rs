//! Infrastructure error types

use mh_core::errors::DomainError;
use redis::RedisError;
use thiserror::Error;

/// Errors raised by the infrastructure layer
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Redis error: {0}")]
    Cache(#[from] RedisError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Session store operation timed out")]
    Timeout,
}

/// Every infrastructure failure surfaces to the domain as a store
/// error; perimeter callers fail closed on it.
impl From<InfraError> for DomainError {
    fn from(error: InfraError) -> Self {
        DomainError::Store {
            message: error.to_string(),
        }
    }
}
