//! Token service module for the JWT session lifecycle
//!
//! This module handles all token-related operations:
//! - Signing, verification, and claim decoding (codec)
//! - Access/refresh token issuance on login
//! - Reissue of expired access tokens with refresh-token rotation
//! - Revocation on logout

mod codec;
mod config;
mod issuer;
mod reissue;
mod revocation;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenConfig;
pub use issuer::TokenIssuer;
pub use reissue::{Reissued, ReissueCoordinator, RotationOutcome};
pub use revocation::RevocationService;
