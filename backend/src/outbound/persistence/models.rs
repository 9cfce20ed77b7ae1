//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{courses, teachers, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub registration_date: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub registration_date: &'a str,
}

// ---------------------------------------------------------------------------
// Catalogue models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub language: Option<String>,
    pub date: Option<String>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub id: Uuid,
    pub name: Option<&'a str>,
    pub language: Option<&'a str>,
    pub date: Option<&'a str>,
    pub teacher_id: Option<Uuid>,
}

/// Changeset for course patches; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = courses)]
pub(crate) struct CourseChangeset<'a> {
    pub name: Option<&'a str>,
    pub language: Option<&'a str>,
    pub date: Option<&'a str>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = teachers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TeacherRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub active: Option<bool>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = teachers)]
pub(crate) struct NewTeacherRow<'a> {
    pub id: Uuid,
    pub name: Option<&'a str>,
    pub age: Option<i32>,
    pub active: Option<bool>,
    pub date: Option<&'a str>,
}

/// Changeset for teacher patches; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = teachers)]
pub(crate) struct TeacherChangeset<'a> {
    pub name: Option<&'a str>,
    pub age: Option<i32>,
    pub active: Option<bool>,
    pub date: Option<&'a str>,
}
