//! GraphQL schema served on `/graphql`.
//!
//! Resolvers pull the driving ports out of the schema data and the caller's
//! [`IdentityContext`] out of the request data. They only translate between
//! GraphQL values and domain types.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema};

use crate::domain::IdentityContext;
use crate::domain::ports::{CatalogueService, CredentialService, UsersQuery};

mod error;
mod mutation;
mod objects;
mod query;

pub use mutation::MutationRoot;
pub use objects::{CourseObject, MessagePayload, TeacherObject, UserObject};
pub use query::QueryRoot;

/// Executable schema type shared with the HTTP handlers.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Driving ports the resolvers call into.
#[derive(Clone)]
pub struct GraphqlServices {
    pub credentials: Arc<dyn CredentialService>,
    pub catalogue: Arc<dyn CatalogueService>,
    pub users: Arc<dyn UsersQuery>,
}

/// Build the schema with `services` installed as schema data.
pub fn build_schema(services: GraphqlServices) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services.credentials)
        .data(services.catalogue)
        .data(services.users)
        .finish()
}

/// Identity attached by the request authenticator. Requests executed
/// without one are anonymous.
fn identity(ctx: &Context<'_>) -> IdentityContext {
    ctx.data_opt::<IdentityContext>()
        .cloned()
        .unwrap_or_default()
}

fn catalogue<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn CatalogueService>> {
    ctx.data::<Arc<dyn CatalogueService>>()
}

fn credentials<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn CredentialService>> {
    ctx.data::<Arc<dyn CredentialService>>()
}

fn users<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn UsersQuery>> {
    ctx.data::<Arc<dyn UsersQuery>>()
}
