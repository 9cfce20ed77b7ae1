//! Port abstraction for course persistence.

use async_trait::async_trait;

use crate::domain::{Course, CourseDraft, CourseId, CoursePatch, TeacherId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by course and teacher repository adapters.
    pub enum CataloguePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "catalogue repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "catalogue repository query failed: {message}",
    }
}

/// Store of courses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persist a new course, assigning its identifier.
    async fn create(&self, draft: CourseDraft) -> Result<Course, CataloguePersistenceError>;

    /// Fetch a course by identifier.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CataloguePersistenceError>;

    /// List every course.
    async fn list(&self) -> Result<Vec<Course>, CataloguePersistenceError>;

    /// List courses taught by `teacher_id`.
    async fn list_by_teacher(
        &self,
        teacher_id: &TeacherId,
    ) -> Result<Vec<Course>, CataloguePersistenceError>;

    /// Apply `patch` and return the updated course, or `None` when absent.
    async fn update(
        &self,
        id: &CourseId,
        patch: CoursePatch,
    ) -> Result<Option<Course>, CataloguePersistenceError>;

    /// Remove a course and return it, or `None` when absent.
    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, CataloguePersistenceError>;

    /// Remove every course, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, CataloguePersistenceError>;
}
