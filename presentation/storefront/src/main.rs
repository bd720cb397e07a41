use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront Entry Point
///
/// Serves the marketplace pages and forms as a local JSON service in front of
/// the marketplace backend.
///
/// - config/: Application configuration (server, CORS, marketplace, local storage)
/// - setup/: Dependency injection, session navigation and server setup
/// - api/: Route handlers, DTOs and error mappers per page
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        marketplace = %config.marketplace.base_url,
        local_storage = %config.storage.path.display(),
        "Configuration loaded"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
