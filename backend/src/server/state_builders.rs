//! Builders wiring repositories, security adapters and domain services.

use std::sync::Arc;

use mockable::DefaultClock;

use courses_backend::domain::ports::{
    CourseRepository, PasswordHashError, TeacherRepository, TokenVerifier, UserRepository,
};
use courses_backend::domain::{CatalogueManager, CredentialManager, UserDirectory};
use courses_backend::inbound::graphql::{AppSchema, GraphqlServices, build_schema};
use courses_backend::outbound::memory::{
    InMemoryCourseRepository, InMemoryTeacherRepository, InMemoryUserRepository,
};
use courses_backend::outbound::persistence::{
    DbPool, DieselCourseRepository, DieselTeacherRepository, DieselUserRepository,
};
use courses_backend::outbound::security::{BcryptPasswordHasher, JwtTokenCodec};

use super::ServerConfig;

struct Repositories {
    users: Arc<dyn UserRepository>,
    courses: Arc<dyn CourseRepository>,
    teachers: Arc<dyn TeacherRepository>,
}

fn build_repositories(pool: Option<&DbPool>) -> Repositories {
    match pool {
        Some(pool) => Repositories {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            courses: Arc::new(DieselCourseRepository::new(pool.clone())),
            teachers: Arc::new(DieselTeacherRepository::new(pool.clone())),
        },
        None => Repositories {
            users: Arc::new(InMemoryUserRepository::new()),
            courses: Arc::new(InMemoryCourseRepository::new()),
            teachers: Arc::new(InMemoryTeacherRepository::new()),
        },
    }
}

/// Everything the HTTP app factory shares between workers.
pub(crate) struct AppState {
    pub(crate) schema: AppSchema,
    pub(crate) verifier: Arc<dyn TokenVerifier>,
}

/// Build the GraphQL schema and the token verifier for the authenticator.
///
/// # Errors
/// Returns [`PasswordHashError`] when the configured bcrypt cost is rejected.
pub(crate) fn build_app_state(config: &ServerConfig) -> Result<AppState, PasswordHashError> {
    let Repositories {
        users,
        courses,
        teachers,
    } = build_repositories(config.db_pool.as_ref());

    let codec = Arc::new(JwtTokenCodec::new(
        config.auth.secret_copy(),
        Arc::new(DefaultClock),
    ));
    let hasher = Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost())?);

    let schema = build_schema(GraphqlServices {
        credentials: Arc::new(CredentialManager::new(
            Arc::clone(&users),
            hasher,
            codec.clone(),
        )),
        catalogue: Arc::new(CatalogueManager::new(courses, teachers)),
        users: Arc::new(UserDirectory::new(users)),
    });

    Ok(AppState {
        schema,
        verifier: codec,
    })
}
