//! Handler for POST /auth/logout

use actix_web::{web, HttpRequest, HttpResponse};

use mh_core::errors::AuthError;
use mh_core::repositories::SessionStore;

use crate::app::AppState;
use crate::dto::LogoutResponse;
use crate::handlers::{bearer_token, handle_domain_error};

use super::removal_cookie;

/// Revokes the presented access token and tears down the session.
///
/// Reads the access token from the `Authorization` header; no request
/// body. The revocation marker and session deletion complete before the
/// response is sent, and the refresh-token cookie is expired on the
/// client.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing header, or an expired/invalid token
/// - 500 Internal Server Error: session store unreachable
pub async fn logout<S>(req: HttpRequest, state: web::Data<AppState<S>>) -> HttpResponse
where
    S: SessionStore + 'static,
{
    let Some(token) = bearer_token(&req) else {
        return handle_domain_error(&AuthError::NoAuthorizationHeader.into());
    };

    match state.revocation.logout(&token).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(removal_cookie(&state.cookie))
            .json(LogoutResponse {
                message: "Logged out successfully".to_string(),
            }),
        Err(error) => handle_domain_error(&error),
    }
}
