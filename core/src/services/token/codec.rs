//! Compact signed token codec

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::TokenConfig;

/// Encodes, decodes, signs, and verifies compact signed tokens
///
/// Holds the symmetric keys derived from an explicit [`TokenConfig`];
/// validation runs with zero leeway so expiry boundaries are exact.
pub struct TokenCodec {
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validation_allow_expired: Validation,
    validation_unverified: Validation,
}

impl TokenCodec {
    /// Creates a new codec from the token configuration
    pub fn new(config: &TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;

        let mut validation_allow_expired = validation.clone();
        validation_allow_expired.validate_exp = false;

        let mut validation_unverified = validation_allow_expired.clone();
        validation_unverified.insecure_disable_signature_validation();

        Self {
            issuer: config.issuer.clone(),
            encoding_key,
            decoding_key,
            validation,
            validation_allow_expired,
            validation_unverified,
        }
    }

    /// Issues a signed access token carrying subject and authority
    pub fn issue(&self, user_id: i64, authority: &str, ttl_seconds: i64) -> Result<String, TokenError> {
        let claims = Claims::new_access(user_id, authority, &self.issuer, ttl_seconds);
        self.encode(&claims)
    }

    /// Issues a signed anonymous token, used for refresh tokens
    pub fn issue_anonymous(&self, ttl_seconds: i64) -> Result<String, TokenError> {
        let claims = Claims::new_anonymous(&self.issuer, ttl_seconds);
        self.encode(&claims)
    }

    /// Encodes prepared claims into a signed token
    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key).map_err(|_| TokenError::GenerationFailed)
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    /// * `Ok(Claims)` - Signature, structure, and expiry all check out
    /// * `Err(TokenError)` - `SignatureInvalid`, `Expired`, or `Malformed`
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }

    /// Verifies signature and structure without enforcing expiry
    ///
    /// The reissue path needs the claims of a genuinely-signed-then-
    /// expired token; this is the single authoritative parse those
    /// claims come from. Callers inspect `Claims::is_expired` themselves.
    pub fn verify_expired(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation_allow_expired)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }

    /// Parses the payload segment without verifying the signature
    ///
    /// Only for subject extraction behind the edge, where the gateway
    /// has already validated the token. Never an authorization decision
    /// on its own.
    pub fn decode_unverified(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation_unverified)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Malformed)
    }
}

/// Maps jsonwebtoken decode failures onto the codec error taxonomy
fn map_decode_error(error: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::SignatureInvalid,
        _ => TokenError::Malformed,
    }
}
