//! Process configuration.
//!
//! `ServerSettings` is layered by OrthoConfig (CLI, environment, files).
//! `AuthSettings` reads secrets through [`mockable::Env`] so tests can inject
//! values without touching the process environment.

pub mod auth;
pub mod server;

pub use auth::{AuthConfigError, AuthSettings, BuildMode, auth_settings_from_env};
pub use server::ServerSettings;
