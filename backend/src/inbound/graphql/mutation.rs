//! Mutation root.
//!
//! `addUser` and `login` report credential failures through the `error`
//! field of [`MessagePayload`]; every other failure is a GraphQL error.

use async_graphql::{Context, ID, Object};
use tracing::debug;

use super::credentials;
use super::error::{graphql_error, parse_course_id, parse_optional_teacher_id, parse_teacher_id};
use super::objects::{CourseObject, MessagePayload, TeacherObject};
use super::catalogue;
use crate::domain::ports::CredentialError;
use crate::domain::{
    CourseDraft, CoursePatch, LOGIN_MESSAGE, LoginCredentials, REGISTERED_MESSAGE, Registration,
    TeacherDraft, TeacherPatch,
};

fn credential_outcome(err: CredentialError) -> async_graphql::Result<MessagePayload> {
    match err {
        CredentialError::Infrastructure(err) => Err(graphql_error(err)),
        soft => Ok(MessagePayload::failure(soft.to_string())),
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Register a user.
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
        date: Option<String>,
    ) -> async_graphql::Result<MessagePayload> {
        let registration = match Registration::try_from_parts(
            name.as_deref().unwrap_or_default(),
            email.as_deref().unwrap_or_default(),
            password.as_deref().unwrap_or_default(),
            date.as_deref().unwrap_or_default(),
        ) {
            Ok(registration) => registration,
            Err(err) => {
                return credential_outcome(CredentialError::InvalidInput {
                    message: err.to_string(),
                });
            }
        };
        match credentials(ctx)?.register(&registration).await {
            Ok(()) => Ok(MessagePayload::success(REGISTERED_MESSAGE)),
            Err(err) => credential_outcome(err),
        }
    }

    /// Exchange an email and password for an identity token.
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: Option<String>,
        password: Option<String>,
    ) -> async_graphql::Result<MessagePayload> {
        let Ok(login) = LoginCredentials::try_from_parts(
            email.as_deref().unwrap_or_default(),
            password.as_deref().unwrap_or_default(),
        ) else {
            debug!("login rejected: malformed credentials");
            return credential_outcome(CredentialError::InvalidCredentials);
        };
        match credentials(ctx)?.login(&login).await {
            Ok(token) => Ok(MessagePayload::success(LOGIN_MESSAGE).with_token(token.into_inner())),
            Err(err) => credential_outcome(err),
        }
    }

    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        language: Option<String>,
        date: Option<String>,
        teacher_id: Option<ID>,
    ) -> async_graphql::Result<CourseObject> {
        let draft = CourseDraft {
            name,
            language,
            date,
            teacher_id: parse_optional_teacher_id(teacher_id.as_ref())?,
        };
        catalogue(ctx)?
            .add_course(draft)
            .await
            .map(CourseObject)
            .map_err(graphql_error)
    }

    /// Change the supplied fields of a course.
    async fn update_course(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        language: Option<String>,
        date: Option<String>,
        teacher_id: Option<ID>,
    ) -> async_graphql::Result<Option<CourseObject>> {
        let id = parse_course_id(&id)?;
        let patch = CoursePatch {
            name,
            language,
            date,
            teacher_id: parse_optional_teacher_id(teacher_id.as_ref())?,
        };
        catalogue(ctx)?
            .update_course(&id, patch)
            .await
            .map(|course| course.map(CourseObject))
            .map_err(graphql_error)
    }

    async fn delete_course(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<CourseObject>> {
        let id = parse_course_id(&id)?;
        catalogue(ctx)?
            .delete_course(&id)
            .await
            .map(|course| course.map(CourseObject))
            .map_err(graphql_error)
    }

    /// Delete every course. Returns how many were removed.
    async fn delete_all_courses(&self, ctx: &Context<'_>) -> async_graphql::Result<u64> {
        catalogue(ctx)?
            .delete_all_courses()
            .await
            .map_err(graphql_error)
    }

    async fn add_teacher(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        active: Option<bool>,
        date: Option<String>,
        age: Option<i32>,
    ) -> async_graphql::Result<TeacherObject> {
        let draft = TeacherDraft {
            name,
            age,
            active,
            date,
        };
        catalogue(ctx)?
            .add_teacher(draft)
            .await
            .map(TeacherObject)
            .map_err(graphql_error)
    }

    /// Change the supplied fields of a teacher.
    async fn update_teacher(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        active: Option<bool>,
        date: Option<String>,
        age: Option<i32>,
    ) -> async_graphql::Result<Option<TeacherObject>> {
        let id = parse_teacher_id(&id)?;
        let patch = TeacherPatch {
            name,
            age,
            active,
            date,
        };
        catalogue(ctx)?
            .update_teacher(&id, patch)
            .await
            .map(|teacher| teacher.map(TeacherObject))
            .map_err(graphql_error)
    }

    async fn delete_teacher(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<TeacherObject>> {
        let id = parse_teacher_id(&id)?;
        catalogue(ctx)?
            .delete_teacher(&id)
            .await
            .map(|teacher| teacher.map(TeacherObject))
            .map_err(graphql_error)
    }
}
