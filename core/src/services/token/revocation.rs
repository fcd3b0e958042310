//! Access token revocation on logout

use std::sync::Arc;
use tracing::debug;

use crate::errors::{AuthError, DomainResult};
use crate::repositories::SessionStore;

use super::codec::TokenCodec;

/// Revokes an access token and tears down the owning session
pub struct RevocationService<S: SessionStore> {
    codec: Arc<TokenCodec>,
    store: Arc<S>,
}

impl<S: SessionStore> RevocationService<S> {
    /// Creates a new revocation service
    pub fn new(codec: Arc<TokenCodec>, store: Arc<S>) -> Self {
        Self { codec, store }
    }

    /// Logs out the holder of the given access token
    ///
    /// The token must still verify: an expired, malformed, or forged
    /// token cannot log out. On success the revocation marker is written
    /// with TTL equal to the token's remaining validity (so it expires
    /// exactly when the token would have), then the user's session
    /// record is deleted. Both writes complete before this returns.
    ///
    /// Idempotent: a second logout with the same still-valid token
    /// rewrites the same marker and finds no session to delete.
    pub async fn logout(&self, access_token: &str) -> DomainResult<()> {
        let claims = self
            .codec
            .verify(access_token)
            .map_err(|_| AuthError::InvalidAccessToken)?;
        let user_id = claims.user_id().map_err(|_| AuthError::InvalidAccessToken)?;

        // Remaining validity can round down to zero between the verify
        // above and this write; the marker is still written.
        let ttl = claims.remaining_validity().max(1) as u64;
        self.store.revoke_access_token(access_token, ttl).await?;

        let had_session = self.store.delete_refresh_token(user_id).await?;
        debug!(user_id, had_session, "access token revoked");

        Ok(())
    }
}
