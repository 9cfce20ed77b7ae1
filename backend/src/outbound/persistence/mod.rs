//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the user, course and teacher repository ports
//! backed by PostgreSQL via `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: Diesel and pool failures map to the port
//!   error enums.
//!
//! # Example
//!
//! ```ignore
//! use courses_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/courses")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_course_repository;
mod diesel_teacher_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;
mod user_persistence_error_mapping;

pub use diesel_course_repository::DieselCourseRepository;
pub use diesel_teacher_repository::DieselTeacherRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
