//! Edge authentication filter
//!
//! Per-request gate at the perimeter: extracts the bearer token,
//! verifies it, checks the revocation list, optionally enforces a
//! required authority for the mounted scope, and injects the
//! authenticated context into request extensions. Any failure
//! short-circuits the chain; nothing is forwarded downstream.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use tracing::{debug, warn};

use mh_core::errors::{AuthError, DomainError};
use mh_core::repositories::SessionStore;
use mh_core::services::token::TokenCodec;
use mh_shared::types::{error_codes, ErrorResponse};

use crate::error::render_error;

/// Authenticated context injected into requests that pass the filter
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id extracted from the subject claim
    pub user_id: i64,
    /// Authority carried by the token
    pub authority: String,
}

/// Edge authentication filter factory
///
/// One filter instance guards one mounted scope. When the scope carries
/// a required authority, the token's authority claim must match it
/// exactly; with no requirement configured, any authenticated subject
/// passes.
pub struct EdgeAuthFilter<St: SessionStore> {
    codec: Arc<TokenCodec>,
    store: Arc<St>,
    required_authority: Option<String>,
}

impl<St: SessionStore> EdgeAuthFilter<St> {
    /// Creates a new edge authentication filter
    pub fn new(codec: Arc<TokenCodec>, store: Arc<St>) -> Self {
        Self {
            codec,
            store,
            required_authority: None,
        }
    }

    /// Requires an exact authority match for the guarded scope
    pub fn with_required_authority(mut self, authority: impl Into<String>) -> Self {
        self.required_authority = Some(authority.into());
        self
    }
}

impl<S, B, St> Transform<S, ServiceRequest> for EdgeAuthFilter<St>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    St: SessionStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = EdgeAuthMiddleware<S, St>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(EdgeAuthMiddleware {
            service: Rc::new(service),
            codec: Arc::clone(&self.codec),
            store: Arc::clone(&self.store),
            required_authority: self.required_authority.clone(),
        }))
    }
}

/// Edge authentication middleware service
pub struct EdgeAuthMiddleware<S, St: SessionStore> {
    service: Rc<S>,
    codec: Arc<TokenCodec>,
    store: Arc<St>,
    required_authority: Option<String>,
}

impl<S, B, St> Service<ServiceRequest> for EdgeAuthMiddleware<S, St>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    St: SessionStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = Arc::clone(&self.codec);
        let store = Arc::clone(&self.store);
        let required_authority = self.required_authority.clone();

        Box::pin(async move {
            match authenticate(&req, &codec, store.as_ref(), required_authority.as_deref()).await
            {
                Ok(context) => {
                    debug!(user_id = context.user_id, "edge validation passed");
                    req.extensions_mut().insert(context);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(error) => {
                    warn!("edge validation rejected request: {}", error);
                    let response = render_error(&error);
                    let (req, _) = req.into_parts();
                    Ok(ServiceResponse::new(req, response).map_into_right_body())
                }
            }
        })
    }
}

/// Runs the edge validation sequence for one request
async fn authenticate<St: SessionStore>(
    req: &ServiceRequest,
    codec: &TokenCodec,
    store: &St,
    required_authority: Option<&str>,
) -> Result<AuthContext, DomainError> {
    let token = extract_bearer_token(req).ok_or(AuthError::NoAuthorizationHeader)?;

    let claims = codec
        .verify(&token)
        .map_err(|_| AuthError::InvalidAccessToken)?;

    // store failure or timeout propagates as-is and fails closed
    if store.is_access_token_revoked(&token).await? {
        return Err(AuthError::TokenRevoked.into());
    }

    let user_id = claims.user_id().map_err(|_| AuthError::InvalidAccessToken)?;
    let authority = claims
        .authority()
        .map_err(|_| AuthError::InvalidAccessToken)?
        .to_string();

    if let Some(required) = required_authority {
        if authority != required {
            return Err(AuthError::Forbidden.into());
        }
    }

    Ok(AuthContext { user_id, authority })
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for the authenticated context injected by the filter
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            InternalError::from_response(
                "authentication required",
                HttpResponse::Unauthorized().json(ErrorResponse::new(
                    error_codes::NO_AUTHORIZATION_HEADER,
                    "Authentication required",
                )),
            )
            .into()
        });

        ready(result)
    }
}
