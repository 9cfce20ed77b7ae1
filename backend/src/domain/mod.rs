//! Domain primitives, services and ports.
//!
//! Purpose: define the strongly typed entities used by the GraphQL and
//! persistence layers, plus the services that implement the driving ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `User`, `EmailAddress`, `PasswordHash`: registered accounts.
//! - `IdentityContext`, `IdentityClaims`, `IdentityToken`: request identity.
//! - `Course`, `Teacher` and their drafts/patches: catalogue entities.
//! - `CredentialManager`, `CatalogueManager`, `UserDirectory`: services.

pub mod auth;
pub mod catalogue;
pub mod catalogue_service;
pub mod credentials;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::auth::{
    AuthorizationError, CredentialsValidationError, IdentityClaims, IdentityContext,
    IdentityToken, LoginCredentials, Registration,
};
pub use self::catalogue::{
    CatalogueValidationError, Course, CourseDraft, CourseId, CoursePatch, Teacher, TeacherDraft,
    TeacherId, TeacherPatch,
};
pub use self::catalogue_service::CatalogueManager;
pub use self::credentials::{CredentialManager, LOGIN_MESSAGE, REGISTERED_MESSAGE};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, PasswordHash, User, UserId, UserValidationError};
pub use self::user_directory::UserDirectory;
