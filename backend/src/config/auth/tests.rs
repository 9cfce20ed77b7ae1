//! Unit tests for auth configuration parsing.

use super::*;
use mockable::MockEnv;
use rstest::rstest;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn mock_env(vars: HashMap<String, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

fn key_file(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&vec![b'f'; len]).expect("write key");
    file
}

fn expect_error(result: Result<AuthSettings, AuthConfigError>, label: &str) -> AuthConfigError {
    match result {
        Ok(_) => panic!("{label}"),
        Err(error) => error,
    }
}

#[rstest]
fn inline_secret_is_used() {
    let secret = "s".repeat(SECRET_MIN_LEN);
    let env = mock_env(vars(&[(SECRET_ENV, &secret)]));

    let settings = auth_settings_from_env(&env, BuildMode::Release).expect("valid settings");
    assert_eq!(settings.secret(), secret.as_bytes());
    assert_eq!(settings.bcrypt_cost(), MIN_COST);
}

#[rstest]
fn secret_file_is_read_byte_for_byte() {
    let file = key_file(SECRET_MIN_LEN);
    let path = file.path().to_str().expect("utf8 path").to_owned();
    let env = mock_env(vars(&[(SECRET_FILE_ENV, &path)]));

    let settings = auth_settings_from_env(&env, BuildMode::Release).expect("valid settings");
    assert_eq!(settings.secret(), vec![b'f'; SECRET_MIN_LEN].as_slice());
}

#[rstest]
fn inline_secret_wins_over_file() {
    let file = key_file(SECRET_MIN_LEN);
    let path = file.path().to_str().expect("utf8 path").to_owned();
    let secret = "i".repeat(SECRET_MIN_LEN);
    let env = mock_env(vars(&[(SECRET_ENV, &secret), (SECRET_FILE_ENV, &path)]));

    let settings = auth_settings_from_env(&env, BuildMode::Release).expect("valid settings");
    assert_eq!(settings.secret(), secret.as_bytes());
}

#[rstest]
fn unreadable_secret_file_is_reported() {
    let env = mock_env(vars(&[(SECRET_FILE_ENV, "/nonexistent/auth-secret")]));
    let err = expect_error(
        auth_settings_from_env(&env, BuildMode::Debug),
        "expected missing file to fail",
    );
    assert!(matches!(err, AuthConfigError::SecretRead { .. }));
}

#[rstest]
#[case(BuildMode::Debug)]
#[case(BuildMode::Release)]
fn missing_secret_is_rejected(#[case] mode: BuildMode) {
    let env = mock_env(HashMap::new());
    let err = expect_error(
        auth_settings_from_env(&env, mode),
        "expected missing secret to fail",
    );
    assert!(matches!(err, AuthConfigError::MissingSecret));
}

#[rstest]
fn short_secret_is_rejected_in_release() {
    let env = mock_env(vars(&[(SECRET_ENV, "short")]));
    let err = expect_error(
        auth_settings_from_env(&env, BuildMode::Release),
        "expected short secret to fail",
    );
    assert!(matches!(
        err,
        AuthConfigError::SecretTooShort {
            length: 5,
            min_len: SECRET_MIN_LEN
        }
    ));
}

#[rstest]
fn short_secret_is_allowed_in_debug() {
    let env = mock_env(vars(&[(SECRET_ENV, "short")]));
    let settings = auth_settings_from_env(&env, BuildMode::Debug).expect("debug tolerates");
    assert_eq!(settings.secret(), b"short");
}

#[rstest]
fn ephemeral_secret_is_generated_in_debug() {
    let env = mock_env(vars(&[(ALLOW_EPHEMERAL_ENV, "1")]));
    let settings = auth_settings_from_env(&env, BuildMode::Debug).expect("ephemeral allowed");
    assert_eq!(settings.secret().len(), EPHEMERAL_SECRET_LEN);
}

#[rstest]
fn ephemeral_secret_is_rejected_in_release() {
    let secret = "s".repeat(SECRET_MIN_LEN);
    let env = mock_env(vars(&[(ALLOW_EPHEMERAL_ENV, "true"), (SECRET_ENV, &secret)]));
    let err = expect_error(
        auth_settings_from_env(&env, BuildMode::Release),
        "expected ephemeral flag to fail",
    );
    assert!(matches!(err, AuthConfigError::EphemeralNotAllowed));
}

#[rstest]
fn invalid_ephemeral_flag_is_rejected() {
    let env = mock_env(vars(&[(ALLOW_EPHEMERAL_ENV, "maybe")]));
    let err = expect_error(
        auth_settings_from_env(&env, BuildMode::Debug),
        "expected invalid flag to fail",
    );
    assert!(matches!(
        err,
        AuthConfigError::InvalidEnv {
            name: ALLOW_EPHEMERAL_ENV,
            ..
        }
    ));
}

#[rstest]
#[case("10", 10)]
#[case("12", 12)]
#[case(" 31 ", 31)]
fn bcrypt_cost_within_range_is_accepted(#[case] raw: &str, #[case] expected: u32) {
    let secret = "s".repeat(SECRET_MIN_LEN);
    let env = mock_env(vars(&[(SECRET_ENV, &secret), (BCRYPT_COST_ENV, raw)]));
    let settings = auth_settings_from_env(&env, BuildMode::Release).expect("valid cost");
    assert_eq!(settings.bcrypt_cost(), expected);
}

#[rstest]
#[case("9")]
#[case("32")]
#[case("ten")]
#[case("")]
fn bcrypt_cost_out_of_range_is_rejected(#[case] raw: &str) {
    let secret = "s".repeat(SECRET_MIN_LEN);
    let env = mock_env(vars(&[(SECRET_ENV, &secret), (BCRYPT_COST_ENV, raw)]));
    let err = expect_error(
        auth_settings_from_env(&env, BuildMode::Release),
        "expected invalid cost to fail",
    );
    assert!(matches!(
        err,
        AuthConfigError::InvalidEnv {
            name: BCRYPT_COST_ENV,
            ..
        }
    ));
}

#[rstest]
fn fingerprint_is_stable_and_hides_secret() {
    let secret = "s".repeat(SECRET_MIN_LEN);
    let env = mock_env(vars(&[(SECRET_ENV, &secret)]));
    let settings = auth_settings_from_env(&env, BuildMode::Release).expect("valid settings");

    let fingerprint = settings.secret_fingerprint();
    assert_eq!(fingerprint.len(), FINGERPRINT_BYTES * 2);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(fingerprint, settings.secret_fingerprint());

    let rendered = format!("{settings:?}");
    assert!(!rendered.contains(&secret));
    assert!(rendered.contains(&fingerprint));
}
