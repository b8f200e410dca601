//! Reelside stories demo entry point.

use std::error::Error;

use tracing_subscriber::EnvFilter;

use reelside_app::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Reelside stories demo");

    let config = AppConfig::from_env()?;
    reelside_app::runner::run(config).await?;

    Ok(())
}
