//! Authentication primitives: credentials, identity claims and the
//! per-request identity context.
//!
//! Inbound adapters parse raw strings through the constructors here before
//! talking to the credential service, keeping payload validation out of the
//! service itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::{EmailAddress, Error, User, UserId, UserValidationError};

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Email was missing or blank.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl From<UserValidationError> for CredentialsValidationError {
    fn from(_: UserValidationError) -> Self {
        Self::EmptyEmail
    }
}

fn password_from(raw: &str) -> Result<Zeroizing<String>, CredentialsValidationError> {
    if raw.is_empty() {
        return Err(CredentialsValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(raw.to_owned()))
}

/// Validated login credentials.
///
/// The password keeps caller-provided whitespace so comparisons are exact.
///
/// # Examples
/// ```
/// use courses_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("a@x.com", "pw1").unwrap();
/// assert_eq!(creds.email().as_ref(), "a@x.com");
/// assert_eq!(creds.password(), "pw1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            password: password_from(password)?,
        })
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    email: EmailAddress,
    password: Zeroizing<String>,
    date: String,
}

impl Registration {
    /// Construct a registration from raw inputs.
    ///
    /// `name` and `date` are stored verbatim; only the credential fields are
    /// validated.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
        date: &str,
    ) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            name: name.to_owned(),
            email: EmailAddress::new(email)?,
            password: password_from(password)?,
            date: date.to_owned(),
        })
    }

    /// Display name for the new account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Unique lookup email for the new account.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plain-text password to hash.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Registration date as supplied by the client.
    pub fn date(&self) -> &str {
        self.date.as_str()
    }
}

/// Claims carried by an identity token.
///
/// Serialised as `{ "userId", "name", "date" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityClaims {
    pub user_id: UserId,
    pub name: String,
    pub date: String,
}

impl IdentityClaims {
    /// Claims describing a registered user.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: *user.id(),
            name: user.name().to_owned(),
            date: user.registration_date().to_owned(),
        }
    }
}

/// Signed identity token handed to clients after login.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Wrap an encoded token.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Consume the wrapper, returning the encoded token.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for IdentityToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityToken(<redacted>)")
    }
}

/// Authentication outcome attached to every inbound request.
///
/// `Authenticated` exists only when a well-formed, signature-valid token was
/// presented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdentityContext {
    /// No token, or the token failed verification.
    #[default]
    Unauthenticated,
    /// Claims decoded from a verified token.
    Authenticated(IdentityClaims),
}

impl IdentityContext {
    /// The `auth` flag downstream checks read.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Decoded claims, when authenticated.
    pub fn claims(&self) -> Option<&IdentityClaims> {
        match self {
            Self::Authenticated(claims) => Some(claims),
            Self::Unauthenticated => None,
        }
    }

    /// Require an authenticated identity.
    ///
    /// # Examples
    /// ```
    /// use courses_backend::domain::{AuthorizationError, IdentityContext};
    ///
    /// let anonymous = IdentityContext::Unauthenticated;
    /// assert_eq!(
    ///     anonymous.require_authenticated().unwrap_err(),
    ///     AuthorizationError::Unauthenticated
    /// );
    /// ```
    pub fn require_authenticated(&self) -> Result<&IdentityClaims, AuthorizationError> {
        self.claims().ok_or(AuthorizationError::Unauthenticated)
    }
}

/// Authorization failures raised by per-operation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    /// The request carried no valid identity token.
    #[error("Unauthenticated")]
    Unauthenticated,
}

impl From<AuthorizationError> for Error {
    fn from(value: AuthorizationError) -> Self {
        Error::unauthorized(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{ErrorCode, PasswordHash};
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("   ", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("a@x.com", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_login_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn login_password_keeps_whitespace() {
        let creds = LoginCredentials::try_from_parts("a@x.com", " pw ").expect("valid");
        assert_eq!(creds.password(), " pw ");
    }

    #[test]
    fn registration_keeps_name_and_date_verbatim() {
        let registration =
            Registration::try_from_parts("", "a@x.com", "pw1", "").expect("valid registration");
        assert_eq!(registration.name(), "");
        assert_eq!(registration.date(), "");
    }

    #[test]
    fn claims_are_built_from_user() {
        let user = User::new(
            UserId::random(),
            "A",
            EmailAddress::new("a@x.com").expect("email"),
            PasswordHash::new("hash"),
            "2024-01-01",
        );
        let claims = IdentityClaims::for_user(&user);
        assert_eq!(claims.user_id, *user.id());
        assert_eq!(claims.name, "A");
        assert_eq!(claims.date, "2024-01-01");
    }

    #[test]
    fn claims_use_camel_case_keys() {
        let claims = IdentityClaims {
            user_id: UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("id"),
            name: "A".to_owned(),
            date: "2024-01-01".to_owned(),
        };
        let json = serde_json::to_value(&claims).expect("serialise");
        assert_eq!(
            json,
            serde_json::json!({
                "userId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "name": "A",
                "date": "2024-01-01"
            })
        );
    }

    #[test]
    fn unauthenticated_context_fails_authorization() {
        let context = IdentityContext::default();
        assert!(!context.is_authenticated());
        let error: Error = context
            .require_authenticated()
            .expect_err("anonymous must fail")
            .into();
        assert_eq!(error.code(), ErrorCode::Unauthorized);
        assert_eq!(error.message(), "Unauthenticated");
    }

    #[test]
    fn authenticated_context_exposes_claims() {
        let claims = IdentityClaims {
            user_id: UserId::random(),
            name: "A".to_owned(),
            date: "today".to_owned(),
        };
        let context = IdentityContext::Authenticated(claims.clone());
        assert!(context.is_authenticated());
        assert_eq!(context.require_authenticated(), Ok(&claims));
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = IdentityToken::new("header.payload.signature");
        assert_eq!(format!("{token:?}"), "IdentityToken(<redacted>)");
    }
}
