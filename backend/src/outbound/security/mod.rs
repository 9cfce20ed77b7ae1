//! Credential hashing and identity token adapters.

mod bcrypt_hasher;
pub mod jwt;

pub use bcrypt_hasher::{BcryptPasswordHasher, MAX_COST, MIN_COST};
pub use jwt::JwtTokenCodec;
