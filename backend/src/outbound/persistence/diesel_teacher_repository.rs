//! PostgreSQL-backed `TeacherRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CataloguePersistenceError, TeacherRepository};
use crate::domain::{Teacher, TeacherDraft, TeacherId, TeacherPatch};

use super::diesel_course_repository::{map_diesel_error, map_pool_error};
use super::models::{NewTeacherRow, TeacherChangeset, TeacherRow};
use super::pool::DbPool;
use super::schema::teachers;

/// Diesel-backed implementation of the `TeacherRepository` port.
#[derive(Clone)]
pub struct DieselTeacherRepository {
    pool: DbPool,
}

impl DieselTeacherRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Self {
            id: TeacherId::from_uuid(row.id),
            name: row.name,
            age: row.age,
            active: row.active,
            date: row.date,
        }
    }
}

#[async_trait]
impl TeacherRepository for DieselTeacherRepository {
    async fn create(&self, draft: TeacherDraft) -> Result<Teacher, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewTeacherRow {
            id: *TeacherId::random().as_uuid(),
            name: draft.name.as_deref(),
            age: draft.age,
            active: draft.active,
            date: draft.date.as_deref(),
        };

        diesel::insert_into(teachers::table)
            .values(&row)
            .returning(TeacherRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Teacher::from)
            .map_err(map_diesel_error)
    }

    async fn find_by_id(
        &self,
        id: &TeacherId,
    ) -> Result<Option<Teacher>, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        teachers::table
            .find(*id.as_uuid())
            .select(TeacherRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Teacher::from))
            .map_err(map_diesel_error)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Teacher>, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        teachers::table
            .filter(teachers::name.eq(name))
            .order((teachers::created_at.asc(), teachers::id.asc()))
            .select(TeacherRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Teacher::from))
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Teacher>, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TeacherRow> = teachers::table
            .order((teachers::created_at.asc(), teachers::id.asc()))
            .select(TeacherRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn update(
        &self,
        id: &TeacherId,
        patch: TeacherPatch,
    ) -> Result<Option<Teacher>, CataloguePersistenceError> {
        // Diesel refuses an empty changeset.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = TeacherChangeset {
            name: patch.name.as_deref(),
            age: patch.age,
            active: patch.active,
            date: patch.date.as_deref(),
        };

        diesel::update(teachers::table.find(*id.as_uuid()))
            .set(&changeset)
            .returning(TeacherRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Teacher::from))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &TeacherId) -> Result<Option<Teacher>, CataloguePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(teachers::table.find(*id.as_uuid()))
            .returning(TeacherRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Teacher::from))
            .map_err(map_diesel_error)
    }
}
