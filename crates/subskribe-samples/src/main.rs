//! Subskribe API samples - entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use subskribe_client::{ServiceConfig, SubskribeService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,subskribe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API session with Subskribe service");

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Could not load configuration");
            return Ok(());
        }
    };

    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "Service configuration loaded"
    );

    let service = SubskribeService::new(config)?;

    if let Err(err) = subskribe_samples::run(&service, chrono::Utc::now().timestamp()).await {
        tracing::error!(error = %err, "Sample flow aborted");
    }

    Ok(())
}
