//! Integration tests for the resource authorization guard
//!
//! Exercises the downstream pattern: the subject comes out of the
//! edge-validated bearer token without re-verification, and the
//! participant role check decides access.

use actix_web::{test, web, App, HttpResponse};
use std::sync::Arc;

use mh_api::handlers::handle_domain_error;
use mh_api::middleware::Subject;
use mh_core::domain::entities::participant::ParticipantRole;
use mh_core::repositories::InMemoryParticipantRepository;
use mh_core::services::authz::ResourceAuthorizer;
use mh_core::services::token::{TokenCodec, TokenConfig};
use mh_shared::config::JwtConfig;
use mh_shared::types::ErrorResponse;

fn codec() -> TokenCodec {
    TokenCodec::new(&TokenConfig::from(JwtConfig::new("guard-test-secret")))
}

/// Endpoint only the meeting host may call
async fn close_meeting(
    subject: Subject,
    path: web::Path<i64>,
    authz: web::Data<ResourceAuthorizer<InMemoryParticipantRepository>>,
) -> HttpResponse {
    let meeting_id = path.into_inner();

    match authz
        .authorize(subject.user_id, meeting_id, &[ParticipantRole::Host])
        .await
    {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({"closed": meeting_id})),
        Err(error) => handle_domain_error(&error),
    }
}

macro_rules! guarded_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(codec()))
                .app_data(web::Data::new(ResourceAuthorizer::new($repo)))
                .route("/meetings/{id}/close", web::post().to(close_meeting)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_host_may_close_meeting() {
    let repo = Arc::new(InMemoryParticipantRepository::new());
    repo.add(7, 42, ParticipantRole::Host).await;
    let app = guarded_app!(repo);

    let token = codec().issue(42, "ROLE_USER", 1800).unwrap();
    let req = test::TestRequest::post()
        .uri("/meetings/7/close")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["closed"], 7);
}

#[actix_web::test]
async fn test_attendee_is_forbidden() {
    let repo = Arc::new(InMemoryParticipantRepository::new());
    repo.add(7, 42, ParticipantRole::Attendee).await;
    let app = guarded_app!(repo);

    let token = codec().issue(42, "ROLE_USER", 1800).unwrap();
    let req = test::TestRequest::post()
        .uri("/meetings/7/close")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "FORBIDDEN");
}

#[actix_web::test]
async fn test_non_member_is_forbidden() {
    let repo = Arc::new(InMemoryParticipantRepository::new());
    repo.add(7, 1, ParticipantRole::Host).await;
    let app = guarded_app!(repo);

    let token = codec().issue(42, "ROLE_USER", 1800).unwrap();
    let req = test::TestRequest::post()
        .uri("/meetings/7/close")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn test_unknown_meeting_is_not_found() {
    let repo = Arc::new(InMemoryParticipantRepository::new());
    let app = guarded_app!(repo);

    let token = codec().issue(42, "ROLE_USER", 1800).unwrap();
    let req = test::TestRequest::post()
        .uri("/meetings/99/close")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "RESOURCE_NOT_FOUND");
}

#[actix_web::test]
async fn test_missing_header_is_rejected() {
    let repo = Arc::new(InMemoryParticipantRepository::new());
    repo.add(7, 42, ParticipantRole::Host).await;
    let app = guarded_app!(repo);

    let req = test::TestRequest::post()
        .uri("/meetings/7/close")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_subject_is_taken_on_trust_behind_the_edge() {
    let repo = Arc::new(InMemoryParticipantRepository::new());
    repo.add(7, 42, ParticipantRole::Host).await;
    let app = guarded_app!(repo);

    // a token signed with a different key still yields its subject:
    // this guard runs behind the edge and never re-verifies, which is
    // why it must only ever be mounted behind the gateway filter
    let foreign_codec = TokenCodec::new(&TokenConfig {
        secret: "some-other-secret".to_string(),
        ..TokenConfig::from(JwtConfig::new("guard-test-secret"))
    });
    let token = foreign_codec.issue(42, "ROLE_USER", 1800).unwrap();

    let req = test::TestRequest::post()
        .uri("/meetings/7/close")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
}
