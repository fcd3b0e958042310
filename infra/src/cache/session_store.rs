//! Redis implementation of the session store

use async_trait::async_trait;

use mh_core::errors::DomainResult;
use mh_core::repositories::{revocation_key, session_key, SessionStore, REVOCATION_MARKER};
use mh_shared::config::CacheConfig;

use crate::errors::InfraError;

use super::redis_client::RedisClient;

/// Session store backed by Redis
///
/// Holds the two record families of the lifecycle under namespaced
/// keys: `UID_<userId>` for active refresh tokens and
/// `BLACKLIST_<token>` for revocation markers. Every write carries a
/// TTL, so records clean themselves up.
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
}

impl RedisSessionStore {
    /// Connect to Redis and create the store
    pub async fn connect(config: CacheConfig) -> Result<Self, InfraError> {
        let client = RedisClient::new(config).await?;
        Ok(Self { client })
    }

    /// Create the store from an existing client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Verify connectivity to the backing store
    pub async fn health_check(&self) -> Result<bool, InfraError> {
        self.client.health_check().await
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put_refresh_token(
        &self,
        user_id: i64,
        token: &str,
        ttl_seconds: u64,
    ) -> DomainResult<()> {
        self.client
            .set_with_expiry(&session_key(user_id), token, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn get_refresh_token(&self, user_id: i64) -> DomainResult<Option<String>> {
        Ok(self.client.get(&session_key(user_id)).await?)
    }

    async fn rotate_refresh_token(
        &self,
        user_id: i64,
        current: &str,
        replacement: &str,
        ttl_seconds: u64,
    ) -> DomainResult<bool> {
        Ok(self
            .client
            .compare_and_swap(&session_key(user_id), current, replacement, ttl_seconds)
            .await?)
    }

    async fn delete_refresh_token(&self, user_id: i64) -> DomainResult<bool> {
        Ok(self.client.delete(&session_key(user_id)).await?)
    }

    async fn revoke_access_token(&self, token: &str, ttl_seconds: u64) -> DomainResult<()> {
        self.client
            .set_with_expiry(&revocation_key(token), REVOCATION_MARKER, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn is_access_token_revoked(&self, token: &str) -> DomainResult<bool> {
        Ok(self.client.exists(&revocation_key(token)).await?)
    }
}
