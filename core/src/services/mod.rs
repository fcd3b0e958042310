//! Business services containing the session lifecycle use cases.

pub mod authz;
pub mod token;

// Re-export commonly used types
pub use authz::ResourceAuthorizer;
pub use token::{
    Reissued, ReissueCoordinator, RevocationService, RotationOutcome, TokenCodec, TokenConfig,
    TokenIssuer,
};
