//! Ports for minting and verifying identity tokens.
//!
//! Both sides are synchronous: signing and verifying an HMAC token is cheap
//! enough to run inline on the request path.

use crate::domain::{IdentityClaims, IdentityToken};

use super::define_port_error;

define_port_error! {
    /// Token codec failures.
    pub enum TokenError {
        /// The token could not be signed.
        Signing { message: String } => "token signing failed: {message}",
        /// The signature does not match the configured secret.
        InvalidSignature => "token signature is invalid",
        /// The token is not a decodable token for this service.
        Malformed { message: String } => "token is malformed: {message}",
    }
}

/// Mints signed identity tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign `claims` into a token.
    fn issue(&self, claims: &IdentityClaims) -> Result<IdentityToken, TokenError>;
}

/// Verifies identity tokens presented by clients.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    /// Verify the signature and decode the claims of `token`.
    fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError>;
}
