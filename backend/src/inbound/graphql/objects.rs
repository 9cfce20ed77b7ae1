//! GraphQL object types.

use async_graphql::{Context, ID, Object, SimpleObject};

use super::catalogue;
use super::error::graphql_error;
use crate::domain::{Course, Teacher, User};

/// A course as exposed over GraphQL.
pub struct CourseObject(pub Course);

#[Object(name = "Course")]
impl CourseObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn language(&self) -> Option<&str> {
        self.0.language.as_deref()
    }

    async fn date(&self) -> Option<&str> {
        self.0.date.as_deref()
    }

    async fn teacher_id(&self) -> Option<ID> {
        self.0.teacher_id.map(|id| ID(id.to_string()))
    }

    /// Teacher referenced by `teacherId`, if any.
    async fn teacher(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<TeacherObject>> {
        let Some(teacher_id) = self.0.teacher_id else {
            return Ok(None);
        };
        catalogue(ctx)?
            .teacher(&teacher_id)
            .await
            .map(|teacher| teacher.map(TeacherObject))
            .map_err(graphql_error)
    }
}

/// A teacher as exposed over GraphQL.
pub struct TeacherObject(pub Teacher);

#[Object(name = "Teacher")]
impl TeacherObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn age(&self) -> Option<i32> {
        self.0.age
    }

    async fn active(&self) -> Option<bool> {
        self.0.active
    }

    async fn date(&self) -> Option<&str> {
        self.0.date.as_deref()
    }

    /// Courses taught by this teacher.
    async fn course(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<CourseObject>> {
        catalogue(ctx)?
            .courses_by_teacher(&self.0.id)
            .await
            .map(|courses| courses.into_iter().map(CourseObject).collect())
            .map_err(graphql_error)
    }
}

/// Public view of a registered user. The password hash is never exposed.
pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.0.id().to_string())
    }

    async fn name(&self) -> &str {
        self.0.name()
    }

    async fn email(&self) -> &str {
        self.0.email().as_ref()
    }

    async fn date(&self) -> &str {
        self.0.registration_date()
    }
}

/// Result of `addUser` and `login`.
///
/// Credential failures populate `error` instead of raising a GraphQL error.
#[derive(Debug, Default, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Message")]
pub struct MessagePayload {
    pub message: Option<String>,
    pub token: Option<String>,
    pub error: Option<String>,
}

impl MessagePayload {
    /// Successful outcome carrying `message`.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Soft failure reported in the `error` field.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
