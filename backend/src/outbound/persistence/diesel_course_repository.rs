//! PostgreSQL-backed `CourseRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CataloguePersistenceError, CourseRepository};
use crate::domain::{Course, CourseDraft, CourseId, CoursePatch, TeacherId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CourseChangeset, CourseRow, NewCourseRow};
use super::pool::{DbPool, PoolError};
use super::schema::courses;

/// Diesel-backed implementation of the `CourseRepository` port.
///
/// Lists are ordered by insertion time.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

pub(super) fn map_pool_error(error: PoolError) -> CataloguePersistenceError {
    map_basic_pool_error(error, CataloguePersistenceError::connection)
}

pub(super) fn map_diesel_error(error: diesel::result::Error) -> CataloguePersistenceError {
    map_basic_diesel_error(
        error,
        CataloguePersistenceError::query,
        CataloguePersistenceError::connection,
    )
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Self {
            id: CourseId::from_uuid(row.id),
            name: row.name,
            language: row.language,
            date: row.date,
            teacher_id: row.teacher_id.map(TeacherId::from_uuid),
        }
    }
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn create(&self, draft: CourseDraft) -> Result<Course, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCourseRow {
            id: *CourseId::random().as_uuid(),
            name: draft.name.as_deref(),
            language: draft.language.as_deref(),
            date: draft.date.as_deref(),
            teacher_id: draft.teacher_id.map(|id| *id.as_uuid()),
        };

        diesel::insert_into(courses::table)
            .values(&row)
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Course::from)
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        courses::table
            .find(*id.as_uuid())
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Course::from))
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Course>, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CourseRow> = courses::table
            .order((courses::created_at.asc(), courses::id.asc()))
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn list_by_teacher(
        &self,
        teacher_id: &TeacherId,
    ) -> Result<Vec<Course>, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CourseRow> = courses::table
            .filter(courses::teacher_id.eq(*teacher_id.as_uuid()))
            .order((courses::created_at.asc(), courses::id.asc()))
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn update(
        &self,
        id: &CourseId,
        patch: CoursePatch,
    ) -> Result<Option<Course>, CataloguePersistenceError> {
        // Diesel refuses an empty changeset.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = CourseChangeset {
            name: patch.name.as_deref(),
            language: patch.language.as_deref(),
            date: patch.date.as_deref(),
            teacher_id: patch.teacher_id.map(|id| *id.as_uuid()),
        };

        diesel::update(courses::table.find(*id.as_uuid()))
            .set(&changeset)
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Course::from))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(courses::table.find(*id.as_uuid()))
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Course::from))
            .map_err(map_diesel_error)
    }

    async fn delete_all(&self) -> Result<u64, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(courses::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn course_row_converts_to_domain() {
        let id = Uuid::new_v4();
        let teacher = Uuid::new_v4();
        let course = Course::from(CourseRow {
            id,
            name: Some("Rust".to_owned()),
            language: None,
            date: Some("2024".to_owned()),
            teacher_id: Some(teacher),
        });

        assert_eq!(course.id, CourseId::from_uuid(id));
        assert_eq!(course.name.as_deref(), Some("Rust"));
        assert_eq!(course.language, None);
        assert_eq!(course.teacher_id, Some(TeacherId::from_uuid(teacher)));
    }

    #[rstest]
    #[case::not_found(DieselError::NotFound, CataloguePersistenceError::query("record not found"))]
    #[case::closed(
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ),
        CataloguePersistenceError::connection("database connection error")
    )]
    #[case::unique(
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_owned()),
        ),
        CataloguePersistenceError::query("database error")
    )]
    fn diesel_errors_map_to_catalogue_errors(
        #[case] error: DieselError,
        #[case] expected: CataloguePersistenceError,
    ) {
        assert_eq!(map_diesel_error(error), expected);
    }

    #[rstest]
    fn pool_build_failure_is_a_connection_error() {
        assert_eq!(
            map_pool_error(PoolError::build("invalid URL")),
            CataloguePersistenceError::connection("invalid URL")
        );
    }
}
