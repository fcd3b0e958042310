//! Configuration modules for MeetHub services

pub mod auth;
pub mod cache;
pub mod server;

pub use auth::{CookieConfig, JwtConfig};
pub use cache::CacheConfig;
pub use server::ServerConfig;
