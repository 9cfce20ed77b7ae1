//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_service;
mod course_repository;
mod credential_service;
mod identity_tokens;
mod password_hasher;
mod teacher_repository;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use catalogue_service::MockCatalogueService;
pub use catalogue_service::CatalogueService;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CataloguePersistenceError, CourseRepository};
#[cfg(test)]
pub use credential_service::MockCredentialService;
pub use credential_service::{CredentialError, CredentialService};
#[cfg(test)]
pub use identity_tokens::{MockTokenIssuer, MockTokenVerifier};
pub use identity_tokens::{TokenError, TokenIssuer, TokenVerifier};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use teacher_repository::MockTeacherRepository;
pub use teacher_repository::TeacherRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
