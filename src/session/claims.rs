use jsonwebtoken::{DecodingKey, Validation};
use serde::Deserialize;

use crate::errors::AuthError;

/// The claims we care about in a bearer token.
#[derive(Debug, Deserialize)]
pub(crate) struct Claims {
    /// Subject: the authenticated user's id.
    pub(crate) sub: Option<u64>,
}

/// Extract the user id from a bearer token without verifying its signature.
///
/// The token is issued by the API and merely echoed back on authenticated
/// requests; the client has no key material to verify it with, it only needs
/// the subject claim. Expiry and audience checks are likewise the server's
/// job.
pub(crate) fn decode_user_id(token: &str) -> Result<u64, AuthError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_aud = false;
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    // Fake key. The decode API requires one even with validation disabled.
    let key = DecodingKey::from_secret(&[]);

    let data = jsonwebtoken::decode::<Claims>(token, &key, &validation)?;
    data.claims.sub.ok_or(AuthError::MissingSubject)
}

/// Mint an unsigned-relevance test token with the given subject.
#[cfg(test)]
pub(crate) fn token_for(sub: u64) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &serde_json::json!({ "sub": sub }),
        &jsonwebtoken::EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}
