//! Handler for POST /auth/login

use actix_web::{web, HttpResponse};

use mh_core::repositories::SessionStore;

use crate::app::AppState;
use crate::dto::{LoginRequest, TokenResponse};
use crate::handlers::handle_domain_error;

use super::refresh_cookie;

/// Issues a token pair once the OAuth2 callback has verified an
/// external identity.
///
/// # Response
///
/// ## Success (200 OK)
/// Access token in the body, refresh token in the dedicated HTTP-only
/// cookie:
/// ```json
/// {
///     "access_token": "eyJ...",
///     "expires_at": 1735689600,
///     "user_id": 42
/// }
/// ```
///
/// ## Errors
/// - 500 Internal Server Error: session store unreachable
pub async fn login<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    S: SessionStore + 'static,
{
    match state.issuer.login(request.user_id, &request.authority).await {
        Ok(pair) => {
            let cookie = refresh_cookie(&state.cookie, &pair.refresh_token, state.refresh_ttl);

            HttpResponse::Ok().cookie(cookie).json(TokenResponse {
                access_token: pair.access_token,
                expires_at: pair.access_expires_at,
                user_id: pair.user_id,
            })
        }
        Err(error) => handle_domain_error(&error),
    }
}
