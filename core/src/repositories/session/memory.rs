//! In-memory implementation of the session store for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::errors::DomainResult;

use super::r#trait::{revocation_key, session_key, SessionStore, REVOCATION_MARKER};

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory session store
///
/// Honors per-key TTLs and performs the rotation compare-and-set under a
/// single lock, mirroring the atomicity the Redis implementation gets
/// from its server-side script.
#[derive(Clone)]
pub struct InMemorySessionStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn live_value(entries: &HashMap<String, Entry>, key: &str) -> Option<String> {
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    fn insert(entries: &mut HashMap<String, Entry>, key: String, value: &str, ttl_seconds: u64) {
        entries.insert(
            key,
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
            },
        );
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put_refresh_token(
        &self,
        user_id: i64,
        token: &str,
        ttl_seconds: u64,
    ) -> DomainResult<()> {
        let mut entries = self.entries.lock().await;
        Self::insert(&mut entries, session_key(user_id), token, ttl_seconds);
        Ok(())
    }

    async fn get_refresh_token(&self, user_id: i64) -> DomainResult<Option<String>> {
        let entries = self.entries.lock().await;
        Ok(Self::live_value(&entries, &session_key(user_id)))
    }

    async fn rotate_refresh_token(
        &self,
        user_id: i64,
        current: &str,
        replacement: &str,
        ttl_seconds: u64,
    ) -> DomainResult<bool> {
        let mut entries = self.entries.lock().await;
        let key = session_key(user_id);

        match Self::live_value(&entries, &key) {
            Some(stored) if stored == current => {
                Self::insert(&mut entries, key, replacement, ttl_seconds);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_refresh_token(&self, user_id: i64) -> DomainResult<bool> {
        let mut entries = self.entries.lock().await;
        Ok(entries.remove(&session_key(user_id)).is_some())
    }

    async fn revoke_access_token(&self, token: &str, ttl_seconds: u64) -> DomainResult<()> {
        let mut entries = self.entries.lock().await;
        Self::insert(&mut entries, revocation_key(token), REVOCATION_MARKER, ttl_seconds);
        Ok(())
    }

    async fn is_access_token_revoked(&self, token: &str) -> DomainResult<bool> {
        let entries = self.entries.lock().await;
        Ok(Self::live_value(&entries, &revocation_key(token)).is_some())
    }
}
