//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_app_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use courses_backend::Trace;
use courses_backend::inbound::graphql::AppSchema;
use courses_backend::inbound::http::{Authenticate, HealthState, configure};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    schema: web::Data<AppSchema>,
    authenticate: Authenticate,
    graphiql: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        schema,
        authenticate,
        graphiql,
    } = deps;

    // Registered last so it runs first: the trace scope covers authentication.
    App::new()
        .app_data(health_state)
        .app_data(schema)
        .wrap(authenticate)
        .wrap(Trace)
        .configure(|cfg| configure(cfg, graphiql))
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when wiring the adapters, binding the socket
/// or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let state = build_app_state(&config).map_err(std::io::Error::other)?;
    let deps = AppDependencies {
        health_state: health_state.clone(),
        schema: web::Data::new(state.schema),
        authenticate: Authenticate::new(state.verifier),
        graphiql: config.graphiql,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
