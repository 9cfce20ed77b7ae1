//! Mapping from Diesel and pool failures to user persistence errors.

use diesel::result::Error as DieselError;

use crate::domain::EmailAddress;
use crate::domain::ports::UserPersistenceError;

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

pub(super) fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Insert failures: the unique email constraint maps to `DuplicateEmail`.
pub(super) fn map_insert_error(error: DieselError, email: &EmailAddress) -> UserPersistenceError {
    if is_unique_violation(&error) {
        return UserPersistenceError::duplicate_email(email.as_ref());
    }
    map_diesel_error(error)
}
