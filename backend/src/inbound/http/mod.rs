//! HTTP inbound adapter: GraphQL endpoint, health probes and the request
//! authenticator.

use actix_web::web;

pub mod authenticator;
pub mod graphql;
pub mod health;

pub use authenticator::{Authenticate, identity_from_header};
pub use health::HealthState;

/// Register the `/graphql` resource and the health probes.
///
/// `GET /graphql` serves the GraphiQL explorer only when `graphiql` is set.
pub fn configure(cfg: &mut web::ServiceConfig, graphiql: bool) {
    let mut resource = web::resource("/graphql").route(web::post().to(graphql::execute));
    if graphiql {
        resource = resource.route(web::get().to(graphql::explorer));
    }
    cfg.service(resource)
        .service(health::ready)
        .service(health::live);
}
