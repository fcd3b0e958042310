//! Application state and route configuration

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use mh_core::repositories::SessionStore;
use mh_core::services::token::{
    ReissueCoordinator, RevocationService, TokenCodec, TokenConfig, TokenIssuer,
};
use mh_shared::config::{CookieConfig, JwtConfig};

use crate::routes;

/// Shared application state for the authentication service
///
/// One codec instance is built from the explicit configuration at
/// startup and shared by every service; there is no process-wide
/// mutable signing state.
pub struct AppState<S: SessionStore> {
    pub codec: Arc<TokenCodec>,
    pub issuer: TokenIssuer<S>,
    pub reissue: ReissueCoordinator<S>,
    pub revocation: RevocationService<S>,
    pub cookie: CookieConfig,
    /// Refresh token lifetime, used as the cookie max-age
    pub refresh_ttl: i64,
}

impl<S: SessionStore> AppState<S> {
    /// Wire the token services around a session store
    pub fn new(store: Arc<S>, jwt: JwtConfig, cookie: CookieConfig) -> Self {
        let config = TokenConfig::from(jwt);
        let codec = Arc::new(TokenCodec::new(&config));
        let refresh_ttl = config.refresh_token_expiry;

        Self {
            codec: Arc::clone(&codec),
            issuer: TokenIssuer::new(Arc::clone(&codec), Arc::clone(&store), config.clone()),
            reissue: ReissueCoordinator::new(
                Arc::clone(&codec),
                Arc::clone(&store),
                config.clone(),
            ),
            revocation: RevocationService::new(codec, store),
            cookie,
            refresh_ttl,
        }
    }
}

/// Mount the authentication routes and the health endpoint
pub fn configure<S: SessionStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(routes::auth::login::login::<S>))
            .route("/reissue", web::post().to(routes::auth::reissue::reissue::<S>))
            .route("/logout", web::post().to(routes::auth::logout::logout::<S>)),
    )
    .route("/health", web::get().to(health_check));
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "meethub-auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
