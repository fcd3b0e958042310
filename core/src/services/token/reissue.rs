//! Reissue of expired access tokens against a stored refresh token

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::SessionStore;

use super::codec::TokenCodec;
use super::config::TokenConfig;

/// Whether reissue replaced the refresh token
///
/// A caller that loses the rotation race never sees this value; the
/// attempt fails with `InvalidRefreshToken` instead of silently keeping
/// a token whose stored counterpart was just overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    /// A new refresh token was committed; the caller must replace the
    /// client cookie
    Rotated(String),
    /// The presented refresh token remains active
    NotRotated,
}

/// Successful reissue result
#[derive(Debug, Clone)]
pub struct Reissued {
    /// Fresh access token
    pub access_token: String,
    /// Fresh access token expiry as epoch seconds
    pub access_expires_at: i64,
    /// Subject the token was reissued for
    pub user_id: i64,
    /// Refresh-token rotation result
    pub rotation: RotationOutcome,
}

/// Validates a reissue request and produces a fresh access token
///
/// The attempt walks a fixed sequence of checks; any failure is a
/// terminal, typed error, and no store mutation happens before the
/// rotation commit.
pub struct ReissueCoordinator<S: SessionStore> {
    codec: Arc<TokenCodec>,
    store: Arc<S>,
    config: TokenConfig,
}

impl<S: SessionStore> ReissueCoordinator<S> {
    /// Creates a new reissue coordinator
    pub fn new(codec: Arc<TokenCodec>, store: Arc<S>, config: TokenConfig) -> Self {
        Self {
            codec,
            store,
            config,
        }
    }

    /// Runs the reissue state machine
    ///
    /// # Arguments
    /// * `bearer` - Token extracted from the `Authorization: Bearer` header
    /// * `refresh_cookie` - Value of the dedicated refresh-token cookie
    pub async fn reissue(
        &self,
        bearer: Option<&str>,
        refresh_cookie: Option<&str>,
    ) -> DomainResult<Reissued> {
        // ExtractAccessToken
        let access_token = bearer.ok_or(AuthError::NoAuthorizationHeader)?;

        // CheckRevocation: a logged-out token cannot be used to reissue
        if self.store.is_access_token_revoked(access_token).await? {
            return Err(AuthError::TokenRevoked.into());
        }

        // ConfirmExpired: one signature-checked parse; its claims are the
        // only source of subject and authority for the new token
        let claims = self
            .codec
            .verify_expired(access_token)
            .map_err(|_| AuthError::InvalidAccessToken)?;
        if !claims.is_expired() {
            return Err(AuthError::AccessTokenNotExpired.into());
        }
        let user_id = claims.user_id().map_err(|_| AuthError::InvalidAccessToken)?;
        let authority = claims
            .authority()
            .map_err(|_| AuthError::InvalidAccessToken)?
            .to_string();

        // ExtractRefreshToken
        let refresh_token = refresh_cookie.ok_or(AuthError::RefreshTokenNotExist)?;

        // LookupSession: stored value must equal the presented one
        match self.store.get_refresh_token(user_id).await? {
            Some(stored) if stored == refresh_token => {}
            _ => return Err(AuthError::InvalidRefreshToken.into()),
        }

        // VerifyRefreshSignature: natural expiry also lands here
        let refresh_claims = self
            .codec
            .verify(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        // ConditionalRotation
        let rotation = self
            .rotate_if_needed(user_id, refresh_token, &refresh_claims)
            .await?;

        // ReissueAccess
        let access_claims = Claims::new_access(
            user_id,
            &authority,
            &self.config.issuer,
            self.config.access_token_expiry,
        );
        let access_token = self.codec.encode(&access_claims)?;

        debug!(user_id, rotated = matches!(rotation, RotationOutcome::Rotated(_)), "reissued access token");

        Ok(Reissued {
            access_token,
            access_expires_at: access_claims.exp,
            user_id,
            rotation,
        })
    }

    /// Rotates the refresh token when its remaining validity has fallen
    /// below the configured threshold
    ///
    /// The commit is a compare-and-set against the value just validated;
    /// a concurrent reissue that rotated first wins, and this caller
    /// observes `InvalidRefreshToken`.
    async fn rotate_if_needed(
        &self,
        user_id: i64,
        current: &str,
        refresh_claims: &Claims,
    ) -> DomainResult<RotationOutcome> {
        if refresh_claims.remaining_validity() >= self.config.rotation_threshold {
            return Ok(RotationOutcome::NotRotated);
        }

        let replacement = self
            .codec
            .issue_anonymous(self.config.refresh_token_expiry)
            .map_err(|_: TokenError| DomainError::Internal {
                message: "refresh token generation failed".to_string(),
            })?;

        let swapped = self
            .store
            .rotate_refresh_token(
                user_id,
                current,
                &replacement,
                self.config.refresh_token_expiry as u64,
            )
            .await?;

        if !swapped {
            debug!(user_id, "refresh token rotation race lost");
            return Err(AuthError::InvalidRefreshToken.into());
        }

        Ok(RotationOutcome::Rotated(replacement))
    }
}
