//! Access/refresh token issuance on login

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::DomainResult;
use crate::repositories::SessionStore;

use super::codec::TokenCodec;
use super::config::TokenConfig;

/// Issues token pairs once an external identity has been verified
///
/// The OAuth2 callback exchange happens upstream; by the time `login`
/// runs, a user id and authority are established facts.
pub struct TokenIssuer<S: SessionStore> {
    codec: Arc<TokenCodec>,
    store: Arc<S>,
    config: TokenConfig,
}

impl<S: SessionStore> TokenIssuer<S> {
    /// Creates a new token issuer
    pub fn new(codec: Arc<TokenCodec>, store: Arc<S>, config: TokenConfig) -> Self {
        Self {
            codec,
            store,
            config,
        }
    }

    /// Issues an access/refresh token pair and records the session
    ///
    /// Overwrites any prior session record for the user: logging in
    /// elsewhere invalidates the old refresh token's stored counterpart,
    /// even though the old token itself still parses until the store
    /// lookup rejects it.
    pub async fn login(&self, user_id: i64, authority: &str) -> DomainResult<TokenPair> {
        let access_claims = Claims::new_access(
            user_id,
            authority,
            &self.config.issuer,
            self.config.access_token_expiry,
        );
        let access_token = self.codec.encode(&access_claims)?;

        let refresh_token = self
            .codec
            .issue_anonymous(self.config.refresh_token_expiry)?;

        self.store
            .put_refresh_token(
                user_id,
                &refresh_token,
                self.config.refresh_token_expiry as u64,
            )
            .await?;

        debug!(user_id, "issued token pair");

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_claims.exp,
            user_id,
        })
    }
}
