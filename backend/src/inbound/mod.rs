//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! [`http`] holds the actix-web handlers and the request authenticator;
//! [`graphql`] holds the schema and resolvers served on `/graphql`.

pub mod graphql;
pub mod http;
