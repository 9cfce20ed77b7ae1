//! Driving port for user lookups.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, IdentityContext, User};

/// Domain use-case port for reading registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Look up a user by email on behalf of an authenticated caller.
    async fn find_by_email(
        &self,
        identity: &IdentityContext,
        email: &EmailAddress,
    ) -> Result<Option<User>, Error>;
}
