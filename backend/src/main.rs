//! Backend entry-point: loads configuration, wires adapters and serves the
//! GraphQL API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use courses_backend::config::{BuildMode, ServerSettings, auth_settings_from_env};
use courses_backend::inbound::http::HealthState;
use courses_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    let auth = auth_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("failed to load auth settings")?;
    info!(
        secret_fingerprint = %auth.secret_fingerprint(),
        bcrypt_cost = auth.bcrypt_cost(),
        "identity token secret loaded"
    );

    let (host, port) = settings.bind_addr();
    let mut config = ServerConfig::new(auth, (host.to_owned(), port), settings.graphiql);

    match settings.database_url() {
        Some(url) => {
            run_migrations(url)
                .await
                .wrap_err("failed to apply database migrations")?;
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.db_pool_size()))
                .await
                .wrap_err("failed to build database pool")?;
            info!(persistence = "postgres", "persistence configured");
            config = config.with_db_pool(pool);
        }
        None => {
            warn!(
                persistence = "memory",
                "no database configured; data will not survive a restart"
            );
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    info!(host, port, "listening");
    server.await.wrap_err("server terminated with an error")
}
