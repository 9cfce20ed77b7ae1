//! Credential manager: user registration and login.
//!
//! Registration hashes the password with a fresh salt and stores the user.
//! Login verifies the password against the stored hash and mints an identity
//! token. An unknown email and a wrong password produce the same
//! [`CredentialError::InvalidCredentials`] so callers cannot probe which
//! emails are registered. An unknown email still pays for one password
//! verification against a decoy hash, so response time does not reveal it
//! either.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::domain::ports::{
    CredentialError, CredentialService, PasswordHasher, TokenIssuer, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    Error, IdentityClaims, IdentityToken, LoginCredentials, PasswordHash, Registration, User,
    UserId,
};

/// Message returned after a successful registration.
pub const REGISTERED_MESSAGE: &str = "User registered successfully";
/// Message returned alongside a freshly minted token.
pub const LOGIN_MESSAGE: &str = "Login successful";

const DECOY_PASSWORD: &str = "decoy-password-never-matches";

pub(crate) fn map_user_store_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { .. } => {
            Error::internal("unexpected duplicate email outside registration")
        }
    }
}

fn map_registration_error(error: UserPersistenceError) -> CredentialError {
    match error {
        UserPersistenceError::DuplicateEmail { .. } => CredentialError::AlreadyExists,
        other => CredentialError::Infrastructure(map_user_store_error(other)),
    }
}

/// Credential service implementing the [`CredentialService`] driving port.
#[derive(Clone)]
pub struct CredentialManager {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    decoy: Arc<OnceCell<PasswordHash>>,
}

impl CredentialManager {
    /// Create a manager over the user store, password hasher and token issuer.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            decoy: Arc::new(OnceCell::new()),
        }
    }

    /// Spend one verification on a hash no submitted password matches.
    async fn verify_decoy(&self, password: &str) -> Result<(), Error> {
        let decoy = self
            .decoy
            .get_or_try_init(|| self.hasher.hash(DECOY_PASSWORD))
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        self.hasher
            .verify(password, decoy)
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        Ok(())
    }

    async fn find_user(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error> {
        self.users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_store_error)
    }
}

#[async_trait]
impl CredentialService for CredentialManager {
    async fn register(&self, registration: &Registration) -> Result<(), CredentialError> {
        let existing = self
            .users
            .find_by_email(registration.email())
            .await
            .map_err(map_user_store_error)?;
        if existing.is_some() {
            debug!("registration rejected: email already registered");
            return Err(CredentialError::AlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(|err| Error::internal(err.to_string()))?;

        let user = User::new(
            UserId::random(),
            registration.name(),
            registration.email().clone(),
            password_hash,
            registration.date(),
        );
        // The store rejects a concurrent duplicate that slipped past the check.
        self.users
            .insert(&user)
            .await
            .map_err(map_registration_error)?;

        info!(user_id = %user.id(), "user registered");
        Ok(())
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<IdentityToken, CredentialError> {
        let Some(user) = self.find_user(credentials).await? else {
            self.verify_decoy(credentials.password()).await?;
            debug!("login rejected");
            return Err(CredentialError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        if !matches {
            debug!("login rejected");
            return Err(CredentialError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&IdentityClaims::for_user(&user))
            .map_err(|err| Error::internal(err.to_string()))?;
        info!(user_id = %user.id(), "identity token issued");
        Ok(token)
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
