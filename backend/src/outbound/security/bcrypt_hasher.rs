//! Bcrypt password hashing adapter.
//!
//! Bcrypt is deliberately slow, so both operations run on the blocking pool
//! with the caller's trace id carried across.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::ports::{PasswordHashError, PasswordHasher};
use crate::domain::{PasswordHash, TraceId};

/// Lowest work factor accepted for stored hashes.
pub const MIN_COST: u32 = 10;
/// Highest work factor bcrypt supports.
pub const MAX_COST: u32 = 31;

/// Bcrypt-backed [`PasswordHasher`] with a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with `cost`, rejecting values outside
    /// [`MIN_COST`]..=[`MAX_COST`].
    pub fn new(cost: u32) -> Result<Self, PasswordHashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordHashError::backend(format!(
                "bcrypt cost {cost} outside {MIN_COST}..={MAX_COST}"
            )));
        }
        Ok(Self { cost })
    }

    /// Configured work factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, PasswordHashError>
where
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
    T: Send + 'static,
{
    let trace_id = TraceId::current();
    tokio::task::spawn_blocking(move || TraceId::sync_scope(trace_id, f))
        .await
        .map_err(|err| PasswordHashError::backend(format!("hashing task failed: {err}")))?
        .map_err(|err| PasswordHashError::backend(err.to_string()))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let cost = self.cost;
        run_blocking(move || bcrypt::hash(password.as_bytes(), cost))
            .await
            .map(PasswordHash::new)
    }

    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let hash = hash.as_ref().to_owned();
        run_blocking(move || bcrypt::verify(password.as_bytes(), &hash)).await
    }
}
