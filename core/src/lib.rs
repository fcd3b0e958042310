//! # MeetHub Core
//!
//! Core session lifecycle logic for the MeetHub backend. This crate
//! contains the domain entities, the token services (codec, issuer,
//! reissue, revocation), resource authorization, repository interfaces,
//! and the error taxonomy shared by the edge gateway and the
//! authentication service.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
