//! Request middleware shared by every route.
//!
//! [`Trace`] scopes a [`crate::TraceId`] to each request. The identity
//! authenticator lives with the HTTP adapter in
//! [`crate::inbound::http::authenticator`].

pub mod trace;

pub use trace::Trace;
