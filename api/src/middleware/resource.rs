//! Subject extraction for resource-level authorization
//!
//! Handlers behind the edge trust that the gateway already validated
//! the token; the [`Subject`] extractor re-derives the user id from the
//! bearer token without re-verifying the signature, and the handler
//! pairs it with `ResourceAuthorizer` for the membership check.

use actix_web::{
    dev::Payload, error::InternalError, web, Error, FromRequest, HttpRequest, HttpResponse,
};
use std::future::{ready, Ready};

use mh_core::services::token::TokenCodec;
use mh_shared::types::{error_codes, ErrorResponse};

use crate::handlers::bearer_token;

/// Subject of an edge-validated request
#[derive(Debug, Clone, Copy)]
pub struct Subject {
    /// User id decoded from the token's subject claim
    pub user_id: i64,
}

impl FromRequest for Subject {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract_subject(req))
    }
}

fn extract_subject(req: &HttpRequest) -> Result<Subject, Error> {
    let codec = req
        .app_data::<web::Data<TokenCodec>>()
        .ok_or_else(|| {
            error_response(
                HttpResponse::InternalServerError(),
                error_codes::SERVER_ERROR,
                "Token codec not configured",
            )
        })?;

    let token = bearer_token(req).ok_or_else(|| {
        error_response(
            HttpResponse::Unauthorized(),
            error_codes::NO_AUTHORIZATION_HEADER,
            "Authorization header missing or malformed",
        )
    })?;

    let claims = codec.decode_unverified(&token).map_err(|_| {
        error_response(
            HttpResponse::Unauthorized(),
            error_codes::INVALID_ACCESS_TOKEN,
            "Invalid access token",
        )
    })?;

    let user_id = claims.user_id().map_err(|_| {
        error_response(
            HttpResponse::Unauthorized(),
            error_codes::INVALID_ACCESS_TOKEN,
            "Invalid access token",
        )
    })?;

    Ok(Subject { user_id })
}

fn error_response(
    mut builder: actix_web::HttpResponseBuilder,
    code: &str,
    message: &str,
) -> Error {
    InternalError::from_response(
        message.to_string(),
        builder.json(ErrorResponse::new(code, message)),
    )
    .into()
}
