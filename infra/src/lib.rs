//! # MeetHub Infrastructure
//!
//! Infrastructure layer for the MeetHub backend: the Redis-backed
//! session store shared by the edge gateway and the authentication
//! service.

pub mod cache;
pub mod errors;

pub use cache::{RedisClient, RedisSessionStore};
pub use errors::InfraError;
