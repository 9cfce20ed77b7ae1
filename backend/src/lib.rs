//! Courses backend library: domain model, ports, and inbound/outbound adapters.
//!
//! The crate follows a hexagonal layout. `domain` owns the entities, the
//! credential manager and the port traits; `inbound` exposes GraphQL over
//! actix-web; `outbound` implements the ports against PostgreSQL, in-memory
//! stores, bcrypt and JWT.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
