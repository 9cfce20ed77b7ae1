//! `/graphql` endpoint handlers.

use actix_web::{HttpResponse, http::header, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::domain::IdentityContext;
use crate::inbound::graphql::AppSchema;

/// Execute a GraphQL request with the caller's identity in the resolver
/// context.
pub async fn execute(
    schema: web::Data<AppSchema>,
    identity: IdentityContext,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema
        .execute(request.into_inner().data(identity))
        .await
        .into()
}

/// Serve the GraphiQL explorer.
pub async fn explorer() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
