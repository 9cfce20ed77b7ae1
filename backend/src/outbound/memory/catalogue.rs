//! In-memory course and teacher stores.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{CataloguePersistenceError, CourseRepository, TeacherRepository};
use crate::domain::{
    Course, CourseDraft, CourseId, CoursePatch, Teacher, TeacherDraft, TeacherId, TeacherPatch,
};

/// Course store backed by a vector behind an async lock.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, draft: CourseDraft) -> Result<Course, CataloguePersistenceError> {
        let course = Course::new(CourseId::random(), draft);
        self.courses.write().await.push(course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CataloguePersistenceError> {
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|course| course.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Course>, CataloguePersistenceError> {
        Ok(self.courses.read().await.clone())
    }

    async fn list_by_teacher(
        &self,
        teacher_id: &TeacherId,
    ) -> Result<Vec<Course>, CataloguePersistenceError> {
        let courses = self.courses.read().await;
        Ok(courses
            .iter()
            .filter(|course| course.teacher_id.as_ref() == Some(teacher_id))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &CourseId,
        patch: CoursePatch,
    ) -> Result<Option<Course>, CataloguePersistenceError> {
        let mut courses = self.courses.write().await;
        Ok(courses
            .iter_mut()
            .find(|course| course.id == *id)
            .map(|course| {
                course.apply(patch);
                course.clone()
            }))
    }

    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, CataloguePersistenceError> {
        let mut courses = self.courses.write().await;
        Ok(courses
            .iter()
            .position(|course| course.id == *id)
            .map(|index| courses.remove(index)))
    }

    async fn delete_all(&self) -> Result<u64, CataloguePersistenceError> {
        let mut courses = self.courses.write().await;
        let removed = courses.len() as u64;
        courses.clear();
        Ok(removed)
    }
}

/// Teacher store backed by a vector behind an async lock.
#[derive(Debug, Default)]
pub struct InMemoryTeacherRepository {
    teachers: RwLock<Vec<Teacher>>,
}

impl InMemoryTeacherRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn create(&self, draft: TeacherDraft) -> Result<Teacher, CataloguePersistenceError> {
        let teacher = Teacher::new(TeacherId::random(), draft);
        self.teachers.write().await.push(teacher.clone());
        Ok(teacher)
    }

    async fn find_by_id(
        &self,
        id: &TeacherId,
    ) -> Result<Option<Teacher>, CataloguePersistenceError> {
        let teachers = self.teachers.read().await;
        Ok(teachers.iter().find(|teacher| teacher.id == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Teacher>, CataloguePersistenceError> {
        let teachers = self.teachers.read().await;
        Ok(teachers
            .iter()
            .find(|teacher| teacher.name.as_deref() == Some(name))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Teacher>, CataloguePersistenceError> {
        Ok(self.teachers.read().await.clone())
    }

    async fn update(
        &self,
        id: &TeacherId,
        patch: TeacherPatch,
    ) -> Result<Option<Teacher>, CataloguePersistenceError> {
        let mut teachers = self.teachers.write().await;
        Ok(teachers
            .iter_mut()
            .find(|teacher| teacher.id == *id)
            .map(|teacher| {
                teacher.apply(patch);
                teacher.clone()
            }))
    }

    async fn delete(&self, id: &TeacherId) -> Result<Option<Teacher>, CataloguePersistenceError> {
        let mut teachers = self.teachers.write().await;
        Ok(teachers
            .iter()
            .position(|teacher| teacher.id == *id)
            .map(|index| teachers.remove(index)))
    }
}
