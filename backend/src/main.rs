//! Roster backend entry-point: loads settings, opens the user store, and
//! serves the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use roster_backend::inbound::http::health::HealthState;
use roster_backend::settings::ServerSettings;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};

#[cfg(feature = "example-data")]
fn startup_seed() -> std::io::Result<Vec<roster_backend::domain::UserFields>> {
    use roster_backend::example_data::{ExampleDataSettings, example_users_for_startup};

    // Flags belong to ServerSettings; example data reads env and files only.
    let settings = ExampleDataSettings::load_from_iter(std::env::args_os().take(1))
        .map_err(std::io::Error::other)?;
    example_users_for_startup(&settings).map_err(std::io::Error::other)
}

#[cfg(not(feature = "example-data"))]
fn startup_seed() -> std::io::Result<Vec<roster_backend::domain::UserFields>> {
    Ok(Vec::new())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    let seed = startup_seed()?;

    info!(
        bind_addr = %config.bind_addr(),
        store = ?settings.store_path,
        cors_origin = settings.cors_origin(),
        "starting roster backend"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config, seed)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
