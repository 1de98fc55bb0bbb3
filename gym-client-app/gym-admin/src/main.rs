use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use gym_core::error::DomainError;
use gym_infrastructure::database::connection;
use gym_shared::config::AppConfig;

mod cli;
mod commands;
mod state;

use cli::Cli;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry
    gym_shared::telemetry::init_telemetry(config.app.log_format);

    info!("{} starting ({})", config.app.name, config.app.env);

    // Connect to Database
    let pool = connection::create_pool(&config.database)
        .await
        .context("Failed to connect to the database")?;
    info!("Database connection established.");

    let state = AppState::new(pool, &config);

    let result = commands::run(&state, cli.command).await;
    if let Err(e) = &result {
        match e.downcast_ref::<DomainError>() {
            Some(domain) if domain.is_client_error() => warn!("Command rejected: {}", domain),
            _ => error!("Command failed: {:#}", e),
        }
    }

    state.pool.close().await;
    result
}
