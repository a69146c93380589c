//! monad.passport HTTP server entry point.

use std::path::Path;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use passport_web::config::{PassportConfig, DEFAULT_CONFIG_PATH};
use passport_web::handlers;
use passport_web::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config =
        PassportConfig::load(Path::new(DEFAULT_CONFIG_PATH)).context("loading configuration")?;

    let db = passport_web::db::connect(&config.database_url)
        .await
        .context("connecting to database")?;

    let state = web::Data::new(AppState::new(&config, db));
    let workers = config.workers.unwrap_or_else(num_cpus::get);
    let bind_address = config.bind_address.clone();

    tracing::info!(%bind_address, workers, "starting monad.passport backend");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("binding {bind_address}"))?
    .run()
    .await?;

    Ok(())
}
