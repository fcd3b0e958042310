//! Integration tests for the edge authentication filter

use actix_web::{test, web, App, HttpResponse};
use async_trait::async_trait;
use std::sync::Arc;

use mh_core::errors::{DomainError, DomainResult};
use mh_core::repositories::{InMemorySessionStore, SessionStore};
use mh_core::services::token::{TokenCodec, TokenConfig};
use mh_gateway::{AuthContext, EdgeAuthFilter};
use mh_shared::types::ErrorResponse;

fn test_config() -> TokenConfig {
    TokenConfig {
        secret: "gateway-test-secret".to_string(),
        issuer: "meethub".to_string(),
        access_token_expiry: 1800,
        refresh_token_expiry: 604800,
        rotation_threshold: 86400,
    }
}

fn codec_and_store() -> (Arc<TokenCodec>, Arc<InMemorySessionStore>) {
    (
        Arc::new(TokenCodec::new(&test_config())),
        Arc::new(InMemorySessionStore::new()),
    )
}

async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "user_id": auth.user_id,
        "authority": auth.authority,
    }))
}

#[actix_web::test]
async fn test_missing_header_is_rejected() {
    let (codec, store) = codec_and_store();
    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, store))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "NO_AUTHORIZATION_HEADER");
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let (codec, store) = codec_and_store();
    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, store))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "INVALID_ACCESS_TOKEN");
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let (codec, store) = codec_and_store();
    let expired = codec.issue(42, "ROLE_USER", -60).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, store))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", expired)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_forged_token_is_rejected() {
    let (codec, store) = codec_and_store();
    let foreign_codec = TokenCodec::new(&TokenConfig {
        secret: "someone-elses-secret".to_string(),
        ..test_config()
    });
    let forged = foreign_codec.issue(42, "ROLE_USER", 1800).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, store))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", forged)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "INVALID_ACCESS_TOKEN");
}

#[actix_web::test]
async fn test_revoked_token_is_rejected() {
    let (codec, store) = codec_and_store();
    let token = codec.issue(42, "ROLE_USER", 1800).unwrap();
    store.revoke_access_token(&token, 1800).await.unwrap();

    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, store))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "TOKEN_REVOKED");
}

#[actix_web::test]
async fn test_valid_token_passes() {
    let (codec, store) = codec_and_store();
    let token = codec.issue(42, "ROLE_USER", 1800).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, store))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], 42);
    assert_eq!(body["authority"], "ROLE_USER");
}

#[actix_web::test]
async fn test_authority_mismatch_is_forbidden() {
    let (codec, store) = codec_and_store();
    let token = codec.issue(42, "ROLE_USER", 1800).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, store).with_required_authority("ROLE_ADMIN"))
            .route("/admin", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "FORBIDDEN");
}

#[actix_web::test]
async fn test_matching_authority_passes() {
    let (codec, store) = codec_and_store();
    let token = codec.issue(1, "ROLE_ADMIN", 1800).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, store).with_required_authority("ROLE_ADMIN"))
            .route("/admin", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
}

/// Store whose revocation lookups always fail, standing in for an
/// unreachable Redis
struct UnreachableStore;

#[async_trait]
impl SessionStore for UnreachableStore {
    async fn put_refresh_token(&self, _: i64, _: &str, _: u64) -> DomainResult<()> {
        Err(store_down())
    }

    async fn get_refresh_token(&self, _: i64) -> DomainResult<Option<String>> {
        Err(store_down())
    }

    async fn rotate_refresh_token(&self, _: i64, _: &str, _: &str, _: u64) -> DomainResult<bool> {
        Err(store_down())
    }

    async fn delete_refresh_token(&self, _: i64) -> DomainResult<bool> {
        Err(store_down())
    }

    async fn revoke_access_token(&self, _: &str, _: u64) -> DomainResult<()> {
        Err(store_down())
    }

    async fn is_access_token_revoked(&self, _: &str) -> DomainResult<bool> {
        Err(store_down())
    }
}

fn store_down() -> DomainError {
    DomainError::Store {
        message: "connection refused".to_string(),
    }
}

#[actix_web::test]
async fn test_store_outage_fails_closed() {
    let codec = Arc::new(TokenCodec::new(&test_config()));
    let token = codec.issue(42, "ROLE_USER", 1800).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(EdgeAuthFilter::new(codec, Arc::new(UnreachableStore)))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // a potentially-revoked token is never admitted
    assert_eq!(resp.status(), 500);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "SERVER_ERROR");
}
