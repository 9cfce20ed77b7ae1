//! Catalogue domain service.
//!
//! Thin pass-through over the course and teacher repositories. The only
//! authorization rule lives in [`CatalogueService::course`]: single-course
//! lookups require an authenticated caller while list reads stay open.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CataloguePersistenceError, CatalogueService, CourseRepository, TeacherRepository,
};
use crate::domain::{
    Course, CourseDraft, CourseId, CoursePatch, Error, IdentityContext, Teacher, TeacherDraft,
    TeacherId, TeacherPatch,
};

fn map_repository_error(error: CataloguePersistenceError) -> Error {
    match error {
        CataloguePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("catalogue repository unavailable: {message}"))
        }
        CataloguePersistenceError::Query { message } => {
            Error::internal(format!("catalogue repository error: {message}"))
        }
    }
}

/// Catalogue service implementing the [`CatalogueService`] driving port.
#[derive(Clone)]
pub struct CatalogueManager {
    courses: Arc<dyn CourseRepository>,
    teachers: Arc<dyn TeacherRepository>,
}

impl CatalogueManager {
    /// Create a service over the course and teacher repositories.
    pub fn new(courses: Arc<dyn CourseRepository>, teachers: Arc<dyn TeacherRepository>) -> Self {
        Self { courses, teachers }
    }
}

#[async_trait]
impl CatalogueService for CatalogueManager {
    async fn course(
        &self,
        identity: &IdentityContext,
        id: &CourseId,
    ) -> Result<Option<Course>, Error> {
        identity.require_authenticated()?;
        self.courses
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn courses(&self) -> Result<Vec<Course>, Error> {
        self.courses.list().await.map_err(map_repository_error)
    }

    async fn courses_by_teacher(&self, teacher_id: &TeacherId) -> Result<Vec<Course>, Error> {
        self.courses
            .list_by_teacher(teacher_id)
            .await
            .map_err(map_repository_error)
    }

    async fn add_course(&self, draft: CourseDraft) -> Result<Course, Error> {
        self.courses
            .create(draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update_course(
        &self,
        id: &CourseId,
        patch: CoursePatch,
    ) -> Result<Option<Course>, Error> {
        self.courses
            .update(id, patch)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_course(&self, id: &CourseId) -> Result<Option<Course>, Error> {
        self.courses.delete(id).await.map_err(map_repository_error)
    }

    async fn delete_all_courses(&self) -> Result<u64, Error> {
        let removed = self
            .courses
            .delete_all()
            .await
            .map_err(map_repository_error)?;
        tracing::info!(removed, "all courses deleted");
        Ok(removed)
    }

    async fn teacher(&self, id: &TeacherId) -> Result<Option<Teacher>, Error> {
        self.teachers
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn teacher_by_name(&self, name: &str) -> Result<Option<Teacher>, Error> {
        self.teachers
            .find_by_name(name)
            .await
            .map_err(map_repository_error)
    }

    async fn teachers(&self) -> Result<Vec<Teacher>, Error> {
        self.teachers.list().await.map_err(map_repository_error)
    }

    async fn add_teacher(&self, draft: TeacherDraft) -> Result<Teacher, Error> {
        self.teachers
            .create(draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update_teacher(
        &self,
        id: &TeacherId,
        patch: TeacherPatch,
    ) -> Result<Option<Teacher>, Error> {
        self.teachers
            .update(id, patch)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_teacher(&self, id: &TeacherId) -> Result<Option<Teacher>, Error> {
        self.teachers.delete(id).await.map_err(map_repository_error)
    }
}
