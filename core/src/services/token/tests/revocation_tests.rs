//! Unit tests for logout/revocation

use super::fixtures::{expired_access_token, services, services_with_config, test_config};
use crate::errors::{AuthError, DomainError};
use crate::repositories::session::r#trait::SessionStore;
use crate::services::token::TokenConfig;

#[tokio::test]
async fn test_logout_revokes_and_deletes_session() {
    let s = services();
    let pair = s.issuer.login(42, "ROLE_USER").await.unwrap();

    s.revocation.logout(&pair.access_token).await.unwrap();

    assert!(s
        .store
        .is_access_token_revoked(&pair.access_token)
        .await
        .unwrap());
    assert_eq!(s.store.get_refresh_token(42).await.unwrap(), None);
}

#[tokio::test]
async fn test_second_logout_is_idempotent() {
    let s = services();
    let pair = s.issuer.login(42, "ROLE_USER").await.unwrap();

    s.revocation.logout(&pair.access_token).await.unwrap();
    s.revocation.logout(&pair.access_token).await.unwrap();

    assert!(s
        .store
        .is_access_token_revoked(&pair.access_token)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_expired_token_cannot_logout() {
    let s = services();
    let expired = expired_access_token(&s.codec, 42, "ROLE_USER");

    let error = s.revocation.logout(&expired).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn test_forged_token_cannot_logout() {
    let s = services();
    let foreign = services_with_config(TokenConfig {
        secret: "other-secret".to_string(),
        ..test_config()
    });
    let forged = foreign.codec.issue(42, "ROLE_USER", 300).unwrap();

    let error = s.revocation.logout(&forged).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn test_garbage_token_cannot_logout() {
    let s = services();

    let error = s.revocation.logout("not-a-token").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn test_logout_leaves_other_sessions_alone() {
    let s = services();
    let a = s.issuer.login(1, "ROLE_USER").await.unwrap();
    let b = s.issuer.login(2, "ROLE_USER").await.unwrap();

    s.revocation.logout(&a.access_token).await.unwrap();

    assert_eq!(s.store.get_refresh_token(1).await.unwrap(), None);
    assert_eq!(
        s.store.get_refresh_token(2).await.unwrap(),
        Some(b.refresh_token)
    );
    assert!(!s
        .store
        .is_access_token_revoked(&b.access_token)
        .await
        .unwrap());
}
