//! Port abstraction for teacher persistence.

use async_trait::async_trait;

use crate::domain::{Teacher, TeacherDraft, TeacherId, TeacherPatch};

use super::CataloguePersistenceError;

/// Store of teachers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Persist a new teacher, assigning its identifier.
    async fn create(&self, draft: TeacherDraft) -> Result<Teacher, CataloguePersistenceError>;

    /// Fetch a teacher by identifier.
    async fn find_by_id(&self, id: &TeacherId)
    -> Result<Option<Teacher>, CataloguePersistenceError>;

    /// Fetch the first teacher whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<Teacher>, CataloguePersistenceError>;

    /// List every teacher.
    async fn list(&self) -> Result<Vec<Teacher>, CataloguePersistenceError>;

    /// Apply `patch` and return the updated teacher, or `None` when absent.
    async fn update(
        &self,
        id: &TeacherId,
        patch: TeacherPatch,
    ) -> Result<Option<Teacher>, CataloguePersistenceError>;

    /// Remove a teacher and return it, or `None` when absent.
    async fn delete(&self, id: &TeacherId) -> Result<Option<Teacher>, CataloguePersistenceError>;
}
