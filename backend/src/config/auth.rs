//! Identity token and password hashing configuration.
//!
//! The signing secret comes from `AUTH_SECRET_KEY` or from the file named by
//! `AUTH_SECRET_KEY_FILE`. Debug builds may fall back to a random secret when
//! `AUTH_ALLOW_EPHEMERAL` is set; release builds refuse to start without a
//! real one.

use std::fmt;
use std::path::PathBuf;

use mockable::Env;
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::warn;
use zeroize::Zeroizing;

use crate::outbound::security::{MAX_COST, MIN_COST};

const SECRET_ENV: &str = "AUTH_SECRET_KEY";
const SECRET_FILE_ENV: &str = "AUTH_SECRET_KEY_FILE";
const ALLOW_EPHEMERAL_ENV: &str = "AUTH_ALLOW_EPHEMERAL";
const BCRYPT_COST_ENV: &str = "AUTH_BCRYPT_COST";
const SECRET_MIN_LEN: usize = 32;
const EPHEMERAL_SECRET_LEN: usize = 64;
const FINGERPRINT_BYTES: usize = 8;
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const COST_EXPECTED: &str = "an integer between 10 and 31";

/// Build mode for auth configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate weak secrets and emit warnings.
    Debug,
    /// Release builds require a strong, explicit secret.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Validated authentication settings.
///
/// `Debug` output shows the secret fingerprint only.
pub struct AuthSettings {
    secret: Zeroizing<Vec<u8>>,
    bcrypt_cost: u32,
}

impl AuthSettings {
    /// HMAC secret used to sign and verify identity tokens.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Owned copy of the secret for handing to the token codec.
    pub fn secret_copy(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.secret.to_vec())
    }

    /// bcrypt work factor for new password hashes.
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    /// Truncated SHA-256 of the secret, safe to log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use courses_backend::config::{BuildMode, auth_settings_from_env};
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "AUTH_SECRET_KEY" => Some("k".repeat(32)),
    ///     _ => None,
    /// });
    /// let settings = auth_settings_from_env(&env, BuildMode::Release).unwrap();
    /// assert_eq!(settings.secret_fingerprint().len(), 16);
    /// ```
    #[must_use]
    pub fn secret_fingerprint(&self) -> String {
        let digest = Sha256::digest(self.secret.as_slice());
        hex::encode(&digest[..FINGERPRINT_BYTES])
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &self.secret_fingerprint())
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Errors raised while validating auth configuration.
#[derive(thiserror::Error, Debug)]
pub enum AuthConfigError {
    /// No secret was configured and ephemeral secrets are not allowed.
    #[error("missing signing secret: set AUTH_SECRET_KEY or AUTH_SECRET_KEY_FILE")]
    MissingSecret,
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the secret file failed.
    #[error("failed to read signing secret at {path}: {source}")]
    SecretRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The secret is too short for release builds.
    #[error("signing secret too short: need >= {min_len} bytes, got {length}")]
    SecretTooShort { length: usize, min_len: usize },
    /// Release builds must not allow ephemeral secrets.
    #[error("AUTH_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build auth settings from environment variables and build mode.
///
/// An inline `AUTH_SECRET_KEY` wins over `AUTH_SECRET_KEY_FILE`. File
/// contents are used byte for byte.
pub fn auth_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<AuthSettings, AuthConfigError> {
    let allow_ephemeral = allow_ephemeral_from_env(env, mode)?;
    let secret = secret_from_env(env, allow_ephemeral)?;
    check_secret_length(&secret, mode)?;
    let bcrypt_cost = bcrypt_cost_from_env(env)?;

    Ok(AuthSettings {
        secret,
        bcrypt_cost,
    })
}

fn allow_ephemeral_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<bool, AuthConfigError> {
    let Some(value) = env.string(ALLOW_EPHEMERAL_ENV) else {
        return Ok(false);
    };
    match parse_bool(&value) {
        Some(true) if mode.is_debug() => Ok(true),
        Some(true) => Err(AuthConfigError::EphemeralNotAllowed),
        Some(false) => Ok(false),
        None => Err(AuthConfigError::InvalidEnv {
            name: ALLOW_EPHEMERAL_ENV,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn secret_from_env<E: Env>(
    env: &E,
    allow_ephemeral: bool,
) -> Result<Zeroizing<Vec<u8>>, AuthConfigError> {
    if let Some(inline) = env.string(SECRET_ENV).filter(|value| !value.is_empty()) {
        return Ok(Zeroizing::new(Zeroizing::new(inline).as_bytes().to_vec()));
    }

    if let Some(path) = env.string(SECRET_FILE_ENV).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(path);
        return std::fs::read(&path)
            .map(Zeroizing::new)
            .map_err(|source| AuthConfigError::SecretRead { path, source });
    }

    if allow_ephemeral {
        warn!("using ephemeral signing secret (dev only); tokens will not survive a restart");
        let mut secret = Zeroizing::new(vec![0_u8; EPHEMERAL_SECRET_LEN]);
        rand::thread_rng().fill_bytes(secret.as_mut_slice());
        return Ok(secret);
    }

    Err(AuthConfigError::MissingSecret)
}

fn check_secret_length(secret: &[u8], mode: BuildMode) -> Result<(), AuthConfigError> {
    let length = secret.len();
    if length >= SECRET_MIN_LEN {
        return Ok(());
    }
    if mode.is_debug() {
        warn!(
            length,
            min_len = SECRET_MIN_LEN,
            "signing secret shorter than recommended"
        );
        return Ok(());
    }
    Err(AuthConfigError::SecretTooShort {
        length,
        min_len: SECRET_MIN_LEN,
    })
}

fn bcrypt_cost_from_env<E: Env>(env: &E) -> Result<u32, AuthConfigError> {
    let Some(value) = env.string(BCRYPT_COST_ENV) else {
        return Ok(MIN_COST);
    };
    match value.trim().parse::<u32>() {
        Ok(cost) if (MIN_COST..=MAX_COST).contains(&cost) => Ok(cost),
        _ => Err(AuthConfigError::InvalidEnv {
            name: BCRYPT_COST_ENV,
            value,
            expected: COST_EXPECTED,
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
