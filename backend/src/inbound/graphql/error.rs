//! Domain error to GraphQL error mapping.

use async_graphql::{ErrorExtensions, ID};
use tracing::error;

use crate::domain::{CourseId, Error, ErrorCode, TeacherId};

/// Convert a domain error into a GraphQL error carrying `code` and `traceId`
/// extensions. Internal messages are logged and redacted.
pub(super) fn graphql_error(err: Error) -> async_graphql::Error {
    if err.code() == ErrorCode::InternalError {
        error!(
            message = err.message(),
            trace_id = err.trace_id().unwrap_or_default(),
            "resolver failed"
        );
    }
    let exposed = err.redacted();
    let code = exposed.code().as_str();
    let trace_id = exposed.trace_id().map(str::to_owned);
    async_graphql::Error::new(exposed.message()).extend_with(|_, extensions| {
        extensions.set("code", code);
        if let Some(trace_id) = trace_id {
            extensions.set("traceId", trace_id);
        }
    })
}

pub(super) fn parse_course_id(raw: &ID) -> async_graphql::Result<CourseId> {
    raw.parse::<CourseId>()
        .map_err(|err| graphql_error(Error::invalid_request(err.to_string())))
}

pub(super) fn parse_teacher_id(raw: &ID) -> async_graphql::Result<TeacherId> {
    raw.parse::<TeacherId>()
        .map_err(|err| graphql_error(Error::invalid_request(err.to_string())))
}

/// Optional id argument; absent stays absent, malformed is an error.
pub(super) fn parse_optional_teacher_id(raw: Option<&ID>) -> async_graphql::Result<Option<TeacherId>> {
    raw.map(parse_teacher_id).transpose()
}
