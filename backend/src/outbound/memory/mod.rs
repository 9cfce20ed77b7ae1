//! In-process repository adapters.
//!
//! Used when no database URL is configured and by integration tests. Records
//! are kept in insertion order so list reads are stable.

mod catalogue;
mod users;

pub use catalogue::{InMemoryCourseRepository, InMemoryTeacherRepository};
pub use users::InMemoryUserRepository;
