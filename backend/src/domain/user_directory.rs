//! Read access to registered users for authenticated callers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::credentials::map_user_store_error;
use crate::domain::ports::{UserRepository, UsersQuery};
use crate::domain::{EmailAddress, Error, IdentityContext, User};

/// Users query service backed by the user store.
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create a directory over the user store.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UsersQuery for UserDirectory {
    async fn find_by_email(
        &self,
        identity: &IdentityContext,
        email: &EmailAddress,
    ) -> Result<Option<User>, Error> {
        identity.require_authenticated()?;
        self.users
            .find_by_email(email)
            .await
            .map_err(map_user_store_error)
    }
}
