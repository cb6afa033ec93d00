//! Accounts service entry-point: loads settings, wires the record store and
//! serves the REST API with its OpenAPI docs.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use accounts::inbound::http::health::HealthState;
use accounts::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use accounts::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Apply migrations and open the pool for `database_url`.
async fn connect_database(database_url: &str, max_connections: u32) -> std::io::Result<DbPool> {
    let migration_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;

    DbPool::new(PoolConfig::new(database_url).with_max_size(max_connections))
        .await
        .map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    let pool = match settings.database_url() {
        Some(url) => {
            let pool = connect_database(url, settings.database_max_connections()).await?;
            config = config.with_db_pool(pool.clone());
            Some(pool)
        }
        None => None,
    };

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "accounts server listening");

    let result = server.await;
    health_state.mark_draining();
    if let Some(pool) = pool {
        drop(pool);
        info!("database pool closed");
    }
    result
}
