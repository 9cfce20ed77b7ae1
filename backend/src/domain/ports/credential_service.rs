//! Driving port for registration and login.

use async_trait::async_trait;

use crate::domain::{Error, IdentityToken, LoginCredentials, Registration};

/// Outcomes of credential operations that are not infrastructure failures.
///
/// `AlreadyExists`, `InvalidCredentials` and `InvalidInput` are reported to
/// clients as soft errors; `Infrastructure` is a hard failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CredentialError {
    #[error("A user with that email already exists")]
    AlreadyExists,
    /// Unknown email and wrong password share this variant and its message.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{message}")]
    InvalidInput { message: String },
    #[error(transparent)]
    Infrastructure(#[from] Error),
}

/// Domain use-case port for user registration and login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Register a new user with a salted password hash.
    async fn register(&self, registration: &Registration) -> Result<(), CredentialError>;

    /// Verify credentials and mint an identity token.
    async fn login(&self, credentials: &LoginCredentials) -> Result<IdentityToken, CredentialError>;
}
