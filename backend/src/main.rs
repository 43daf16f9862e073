//! Service entry-point: loads settings, then serves the users API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use userbase::inbound::http::health::HealthState;
use userbase::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let validation = settings.validation_mode().map_err(io::Error::other)?;
    info!(%bind_addr, %validation, "starting userbase");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr).with_validation(validation);
    create_server(health_state, config)?.await
}
