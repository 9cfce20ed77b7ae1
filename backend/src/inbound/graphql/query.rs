//! Query root.

use async_graphql::{Context, ID, Object};

use super::error::{graphql_error, parse_course_id};
use super::objects::{CourseObject, TeacherObject, UserObject};
use super::{catalogue, identity, users};
use crate::domain::{EmailAddress, Error};

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Fetch one course. Requires an authenticated caller.
    async fn course(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<CourseObject>> {
        // Checked before the id is parsed.
        let identity = identity(ctx);
        identity
            .require_authenticated()
            .map_err(|err| graphql_error(err.into()))?;
        let id = parse_course_id(&id)?;
        catalogue(ctx)?
            .course(&identity, &id)
            .await
            .map(|course| course.map(CourseObject))
            .map_err(graphql_error)
    }

    async fn courses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<CourseObject>> {
        catalogue(ctx)?
            .courses()
            .await
            .map(|courses| courses.into_iter().map(CourseObject).collect())
            .map_err(graphql_error)
    }

    /// First teacher whose name matches exactly.
    async fn teacher(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<TeacherObject>> {
        catalogue(ctx)?
            .teacher_by_name(&name)
            .await
            .map(|teacher| teacher.map(TeacherObject))
            .map_err(graphql_error)
    }

    async fn teachers(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<TeacherObject>> {
        catalogue(ctx)?
            .teachers()
            .await
            .map(|teachers| teachers.into_iter().map(TeacherObject).collect())
            .map_err(graphql_error)
    }

    /// Public profile of a registered user. Requires an authenticated caller.
    async fn user(
        &self,
        ctx: &Context<'_>,
        email: String,
    ) -> async_graphql::Result<Option<UserObject>> {
        let identity = identity(ctx);
        identity
            .require_authenticated()
            .map_err(|err| graphql_error(err.into()))?;
        let email = EmailAddress::new(email)
            .map_err(|err| graphql_error(Error::invalid_request(err.to_string())))?;
        users(ctx)?
            .find_by_email(&identity, &email)
            .await
            .map(|user| user.map(UserObject))
            .map_err(graphql_error)
    }
}
