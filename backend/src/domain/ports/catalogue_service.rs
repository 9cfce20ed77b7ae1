//! Driving port for the courses and teachers catalogue.
//!
//! Only `course` takes the caller's identity; the list reads are open.

use async_trait::async_trait;

use crate::domain::{
    Course, CourseDraft, CourseId, CoursePatch, Error, IdentityContext, Teacher, TeacherDraft,
    TeacherId, TeacherPatch,
};

/// Domain use-case port for catalogue reads and writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueService: Send + Sync {
    /// Fetch a single course. Fails with `Unauthorized` for anonymous callers.
    async fn course(
        &self,
        identity: &IdentityContext,
        id: &CourseId,
    ) -> Result<Option<Course>, Error>;

    async fn courses(&self) -> Result<Vec<Course>, Error>;

    async fn courses_by_teacher(&self, teacher_id: &TeacherId) -> Result<Vec<Course>, Error>;

    async fn add_course(&self, draft: CourseDraft) -> Result<Course, Error>;

    async fn update_course(
        &self,
        id: &CourseId,
        patch: CoursePatch,
    ) -> Result<Option<Course>, Error>;

    async fn delete_course(&self, id: &CourseId) -> Result<Option<Course>, Error>;

    /// Delete every course and return how many were removed.
    async fn delete_all_courses(&self) -> Result<u64, Error>;

    async fn teacher(&self, id: &TeacherId) -> Result<Option<Teacher>, Error>;

    async fn teacher_by_name(&self, name: &str) -> Result<Option<Teacher>, Error>;

    async fn teachers(&self) -> Result<Vec<Teacher>, Error>;

    async fn add_teacher(&self, draft: TeacherDraft) -> Result<Teacher, Error>;

    async fn update_teacher(
        &self,
        id: &TeacherId,
        patch: TeacherPatch,
    ) -> Result<Option<Teacher>, Error>;

    async fn delete_teacher(&self, id: &TeacherId) -> Result<Option<Teacher>, Error>;
}
