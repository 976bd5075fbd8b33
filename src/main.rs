//! # Whiskers API Main Entry Point
//!
//! This is the main entry point for the Whiskers API service.

use migration::MigratorTrait;
use whiskers::{config::ConfigLoader, db, server::run_server, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    telemetry::init_tracing(&config)?;
    tracing::info!(profile = %config.profile, "configuration loaded");

    let pool = db::init_pool(&config).await?;
    migration::Migrator::up(&pool, None).await?;

    // Start the server with the loaded configuration
    run_server(config, pool).await
}
