//! HS256 identity token codec.
//!
//! [`sign`] and [`verify`] are pure functions of their inputs; the
//! [`JwtTokenCodec`] adapter binds them to a configured secret and clock to
//! implement the token ports.
//!
//! Tokens carry no `exp` claim and verification does not require one, so a
//! token stays valid until the secret changes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::ports::{TokenError, TokenIssuer, TokenVerifier};
use crate::domain::{IdentityClaims, IdentityToken};

#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    #[serde(flatten)]
    identity: IdentityClaims,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    validation
}

/// Sign `claims` with `secret`, stamping `issued_at` as the `iat` claim.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use courses_backend::domain::{IdentityClaims, UserId};
/// use courses_backend::outbound::security::jwt::{sign, verify};
///
/// let claims = IdentityClaims {
///     user_id: UserId::random(),
///     name: "A".to_owned(),
///     date: "2024-01-01".to_owned(),
/// };
/// let token = sign(&claims, b"secret", Utc::now()).unwrap();
/// assert_eq!(verify(token.as_ref(), b"secret").unwrap(), claims);
/// ```
pub fn sign(
    claims: &IdentityClaims,
    secret: &[u8],
    issued_at: DateTime<Utc>,
) -> Result<IdentityToken, TokenError> {
    let wire = WireClaims {
        identity: claims.clone(),
        iat: Some(issued_at.timestamp()),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &wire,
        &EncodingKey::from_secret(secret),
    )
    .map(IdentityToken::new)
    .map_err(|err| TokenError::signing(err.to_string()))
}

/// Verify the signature of `token` against `secret` and decode its claims.
pub fn verify(token: &str, secret: &[u8]) -> Result<IdentityClaims, TokenError> {
    decode::<WireClaims>(token, &DecodingKey::from_secret(secret), &validation())
        .map(|data| data.claims.identity)
        .map_err(|err| match err.kind() {
            ErrorKind::InvalidSignature => TokenError::invalid_signature(),
            _ => TokenError::malformed(err.to_string()),
        })
}

/// Token adapter bound to the process-wide signing secret.
#[derive(Clone)]
pub struct JwtTokenCodec {
    secret: Arc<Zeroizing<Vec<u8>>>,
    clock: Arc<dyn Clock>,
}

impl JwtTokenCodec {
    /// Create a codec over `secret`, reading issue times from `clock`.
    pub fn new(secret: Zeroizing<Vec<u8>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret: Arc::new(secret),
            clock,
        }
    }
}

impl TokenIssuer for JwtTokenCodec {
    fn issue(&self, claims: &IdentityClaims) -> Result<IdentityToken, TokenError> {
        sign(claims, self.secret.as_slice(), self.clock.utc())
    }
}

impl TokenVerifier for JwtTokenCodec {
    fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        verify(token, self.secret.as_slice())
    }
}
