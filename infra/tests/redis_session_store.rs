//! Integration tests for the Redis session store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p mh_infra --test redis_session_store -- --ignored

use mh_core::repositories::SessionStore;
use mh_infra::cache::{CacheConfig, RedisSessionStore};

async fn store() -> RedisSessionStore {
    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );
    RedisSessionStore::connect(config)
        .await
        .expect("Failed to connect to Redis")
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_health_check() {
    let store = store().await;
    assert!(store.health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_put_get_delete_refresh_token() {
    let store = store().await;
    let user_id = 910_001;

    store
        .put_refresh_token(user_id, "refresh-a", 60)
        .await
        .unwrap();
    assert_eq!(
        store.get_refresh_token(user_id).await.unwrap(),
        Some("refresh-a".to_string())
    );

    assert!(store.delete_refresh_token(user_id).await.unwrap());
    assert!(!store.delete_refresh_token(user_id).await.unwrap());
    assert_eq!(store.get_refresh_token(user_id).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_rotate_refresh_token_compare_and_swap() {
    let store = store().await;
    let user_id = 910_002;

    store
        .put_refresh_token(user_id, "refresh-a", 60)
        .await
        .unwrap();

    // matching value swaps
    assert!(store
        .rotate_refresh_token(user_id, "refresh-a", "refresh-b", 60)
        .await
        .unwrap());
    assert_eq!(
        store.get_refresh_token(user_id).await.unwrap(),
        Some("refresh-b".to_string())
    );

    // stale value loses
    assert!(!store
        .rotate_refresh_token(user_id, "refresh-a", "refresh-c", 60)
        .await
        .unwrap());
    assert_eq!(
        store.get_refresh_token(user_id).await.unwrap(),
        Some("refresh-b".to_string())
    );

    store.delete_refresh_token(user_id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_rotate_without_session_fails() {
    let store = store().await;
    let user_id = 910_003;

    assert!(!store
        .rotate_refresh_token(user_id, "refresh-a", "refresh-b", 60)
        .await
        .unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_revocation_marker_lifecycle() {
    let store = store().await;
    let token = "integration-test-access-token";

    assert!(!store.is_access_token_revoked(token).await.unwrap());
    store.revoke_access_token(token, 60).await.unwrap();
    assert!(store.is_access_token_revoked(token).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_ttl_expires_session_record() {
    let store = store().await;
    let user_id = 910_004;

    store
        .put_refresh_token(user_id, "short-lived", 1)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    assert_eq!(store.get_refresh_token(user_id).await.unwrap(), None);
}
