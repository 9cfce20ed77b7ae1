//! Tests for the credential manager.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{
    MockPasswordHasher, MockTokenIssuer, MockUserRepository, PasswordHashError, TokenError,
};
use crate::domain::{EmailAddress, ErrorCode, PasswordHash};

fn registration() -> Registration {
    Registration::try_from_parts("A", "a@x.com", "pw1", "2024-01-01").expect("valid registration")
}

fn stored_user() -> User {
    User::new(
        UserId::random(),
        "A",
        EmailAddress::new("a@x.com").expect("email"),
        PasswordHash::new("$2b$10$stored"),
        "2024-01-01",
    )
}

fn manager(
    users: MockUserRepository,
    hasher: MockPasswordHasher,
    tokens: MockTokenIssuer,
) -> CredentialManager {
    CredentialManager::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens))
}

fn hasher_returning(matches: bool) -> MockPasswordHasher {
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().returning(move |_, _| Ok(matches));
    hasher
}

fn decoy_hasher() -> MockPasswordHasher {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok(PasswordHash::new("$2b$10$decoy")));
    hasher.expect_verify().returning(|_, _| Ok(false));
    hasher
}

#[tokio::test]
async fn register_hashes_and_stores_new_user() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().times(1).returning(|_| Ok(None));
    users
        .expect_insert()
        .withf(|user| {
            user.email().as_ref() == "a@x.com"
                && user.name() == "A"
                && user.registration_date() == "2024-01-01"
                && user.password_hash().as_ref() == "hashed:pw1"
        })
        .times(1)
        .returning(|_| Ok(()));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .times(1)
        .returning(|password| Ok(PasswordHash::new(format!("hashed:{password}"))));

    let service = manager(users, hasher, MockTokenIssuer::new());
    service
        .register(&registration())
        .await
        .expect("registration succeeds");
}

#[tokio::test]
async fn register_rejects_existing_email_without_hashing() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(|_| Ok(Some(stored_user())));
    users.expect_insert().times(0);
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(0);

    let service = manager(users, hasher, MockTokenIssuer::new());
    let err = service
        .register(&registration())
        .await
        .expect_err("duplicate email");
    assert_eq!(err, CredentialError::AlreadyExists);
}

#[tokio::test]
async fn register_maps_store_duplicate_to_already_exists() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users
        .expect_insert()
        .returning(|_| Err(UserPersistenceError::duplicate_email("a@x.com")));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok(PasswordHash::new("hash")));

    let service = manager(users, hasher, MockTokenIssuer::new());
    let err = service
        .register(&registration())
        .await
        .expect_err("store rejects duplicate");
    assert_eq!(err, CredentialError::AlreadyExists);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn register_surfaces_store_failures_as_infrastructure(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Err(failure.clone()));

    let service = manager(users, MockPasswordHasher::new(), MockTokenIssuer::new());
    match service.register(&registration()).await {
        Err(CredentialError::Infrastructure(error)) => assert_eq!(error.code(), expected),
        other => panic!("expected infrastructure error, got {other:?}"),
    }
}

#[tokio::test]
async fn register_surfaces_hash_failure_as_internal() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users.expect_insert().times(0);
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Err(PasswordHashError::backend("cost out of range")));

    let service = manager(users, hasher, MockTokenIssuer::new());
    match service.register(&registration()).await {
        Err(CredentialError::Infrastructure(error)) => {
            assert_eq!(error.code(), ErrorCode::InternalError);
        }
        other => panic!("expected infrastructure error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_issues_token_with_user_claims() {
    let user = stored_user();
    let expected_claims = IdentityClaims::for_user(&user);
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));
    let mut tokens = MockTokenIssuer::new();
    tokens
        .expect_issue()
        .withf(move |claims| *claims == expected_claims)
        .times(1)
        .returning(|_| Ok(IdentityToken::new("signed")));

    let service = manager(users, hasher_returning(true), tokens);
    let creds = LoginCredentials::try_from_parts("a@x.com", "pw1").expect("credentials");
    let token = service.login(&creds).await.expect("login succeeds");
    assert_eq!(token.as_ref(), "signed");
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let mut missing = MockUserRepository::new();
    missing.expect_find_by_email().returning(|_| Ok(None));
    let mut tokens = MockTokenIssuer::new();
    tokens.expect_issue().times(0);
    let unknown = manager(missing, decoy_hasher(), tokens);

    let mut present = MockUserRepository::new();
    present
        .expect_find_by_email()
        .returning(|_| Ok(Some(stored_user())));
    let wrong = manager(present, hasher_returning(false), MockTokenIssuer::new());

    let creds = LoginCredentials::try_from_parts("a@x.com", "nope").expect("credentials");
    let unknown_err = unknown.login(&creds).await.expect_err("unknown email");
    let wrong_err = wrong.login(&creds).await.expect_err("wrong password");

    assert_eq!(unknown_err, CredentialError::InvalidCredentials);
    assert_eq!(unknown_err, wrong_err);
    assert_eq!(unknown_err.to_string(), wrong_err.to_string());
}

#[tokio::test]
async fn login_surfaces_signing_failure_as_internal() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(|_| Ok(Some(stored_user())));
    let mut tokens = MockTokenIssuer::new();
    tokens
        .expect_issue()
        .returning(|_| Err(TokenError::signing("bad key")));

    let service = manager(users, hasher_returning(true), tokens);
    let creds = LoginCredentials::try_from_parts("a@x.com", "pw1").expect("credentials");
    match service.login(&creds).await {
        Err(CredentialError::Infrastructure(error)) => {
            assert_eq!(error.code(), ErrorCode::InternalError);
        }
        other => panic!("expected infrastructure error, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_email_still_runs_a_password_verification() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .times(1)
        .returning(|_| Ok(PasswordHash::new("$2b$10$decoy")));
    hasher
        .expect_verify()
        .withf(|password, hash| {
            password.to_string() == "pw1" && hash.as_ref() == "$2b$10$decoy"
        })
        .times(2)
        .returning(|_, _| Ok(false));

    let service = manager(users, hasher, MockTokenIssuer::new());
    let creds = LoginCredentials::try_from_parts("ghost@x.com", "pw1").expect("credentials");
    for _ in 0..2 {
        assert_eq!(
            service.login(&creds).await,
            Err(CredentialError::InvalidCredentials)
        );
    }
}

#[tokio::test]
async fn decoy_hash_failure_is_infrastructure() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Err(PasswordHashError::backend("cost out of range")));
    hasher.expect_verify().times(0);

    let service = manager(users, hasher, MockTokenIssuer::new());
    let creds = LoginCredentials::try_from_parts("ghost@x.com", "pw1").expect("credentials");
    assert!(matches!(
        service.login(&creds).await,
        Err(CredentialError::Infrastructure(_))
    ));
}
