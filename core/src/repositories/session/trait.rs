//! Session store trait defining the interface for cross-request state.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Key prefix for active refresh-token records, keyed by user id
pub const SESSION_KEY_PREFIX: &str = "UID_";

/// Key prefix for revoked access-token markers, keyed by token value
pub const REVOCATION_KEY_PREFIX: &str = "BLACKLIST_";

/// Marker value stored under a revocation key; the presence of the key
/// is what matters, not the value
pub const REVOCATION_MARKER: &str = "revoked";

/// Builds the store key for a user's refresh-token record
pub fn session_key(user_id: i64) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, user_id)
}

/// Builds the store key for an access-token revocation marker
pub fn revocation_key(token: &str) -> String {
    format!("{}{}", REVOCATION_KEY_PREFIX, token)
}

/// Store trait for the two record families of the session lifecycle:
/// active refresh-token-per-user mappings and revoked-access-token
/// markers.
///
/// Every write carries a TTL so records self-expire without an explicit
/// garbage collector. Implementations must be safe for concurrent access
/// from many service instances; the rotation write is the only
/// compare-and-set operation and must be atomic.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store the current refresh token for a user, overwriting any
    /// previous session record (last-write-wins).
    ///
    /// # Arguments
    /// * `user_id` - Owning user id
    /// * `token` - Refresh token value to store
    /// * `ttl_seconds` - Remaining refresh-token validity
    async fn put_refresh_token(
        &self,
        user_id: i64,
        token: &str,
        ttl_seconds: u64,
    ) -> DomainResult<()>;

    /// Read the stored refresh token for a user
    ///
    /// # Returns
    /// * `Ok(Some(token))` - Active session record found
    /// * `Ok(None)` - No session record, or it has expired
    async fn get_refresh_token(&self, user_id: i64) -> DomainResult<Option<String>>;

    /// Atomically replace the stored refresh token, but only if the
    /// stored value still equals `current`.
    ///
    /// Concurrent reissue calls racing through rotation must not both
    /// succeed; the loser observes `false` and reports the refresh token
    /// as invalid.
    ///
    /// # Returns
    /// * `Ok(true)` - Swap happened
    /// * `Ok(false)` - Stored value differed (rotation race lost, or
    ///   session gone)
    async fn rotate_refresh_token(
        &self,
        user_id: i64,
        current: &str,
        replacement: &str,
        ttl_seconds: u64,
    ) -> DomainResult<bool>;

    /// Delete the session record for a user
    ///
    /// # Returns
    /// * `Ok(true)` - A record was deleted
    /// * `Ok(false)` - No record existed
    async fn delete_refresh_token(&self, user_id: i64) -> DomainResult<bool>;

    /// Write a revocation marker for an access token
    ///
    /// # Arguments
    /// * `token` - The access token value being revoked
    /// * `ttl_seconds` - Remaining access-token validity; the marker
    ///   never outlives the token it blacklists
    async fn revoke_access_token(&self, token: &str, ttl_seconds: u64) -> DomainResult<()>;

    /// Check whether an access token carries a revocation marker
    async fn is_access_token_revoked(&self, token: &str) -> DomainResult<bool>;
}
