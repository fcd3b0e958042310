//! Data transfer objects for the authentication endpoints

pub mod auth;

pub use auth::{LoginRequest, LogoutResponse, TokenResponse};
