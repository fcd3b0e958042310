//! Handler for POST /auth/reissue

use actix_web::{web, HttpRequest, HttpResponse};

use mh_core::repositories::SessionStore;
use mh_core::services::token::RotationOutcome;

use crate::app::AppState;
use crate::dto::TokenResponse;
use crate::handlers::{bearer_token, handle_domain_error};

use super::refresh_cookie;

/// Reissues an expired access token against the refresh-token cookie.
///
/// Reads the expired access token from the `Authorization` header and
/// the refresh token from its dedicated cookie. When the refresh token
/// was close enough to expiry to be rotated, the response also carries
/// a replacement cookie.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "expires_at": 1735689600,
///     "user_id": 42
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing header/cookie, non-expired or invalid
///   access token, revoked token, or a refresh token that is invalid,
///   mismatched, or lost a rotation race
/// - 500 Internal Server Error: session store unreachable
pub async fn reissue<S>(req: HttpRequest, state: web::Data<AppState<S>>) -> HttpResponse
where
    S: SessionStore + 'static,
{
    let bearer = bearer_token(&req);
    let refresh = req
        .cookie(&state.cookie.name)
        .map(|cookie| cookie.value().to_string());

    match state
        .reissue
        .reissue(bearer.as_deref(), refresh.as_deref())
        .await
    {
        Ok(reissued) => {
            let mut response = HttpResponse::Ok();

            if let RotationOutcome::Rotated(new_refresh) = &reissued.rotation {
                response.cookie(refresh_cookie(&state.cookie, new_refresh, state.refresh_ttl));
            }

            response.json(TokenResponse {
                access_token: reissued.access_token,
                expires_at: reissued.access_expires_at,
                user_id: reissued.user_id,
            })
        }
        Err(error) => handle_domain_error(&error),
    }
}
