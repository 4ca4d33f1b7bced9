use anyhow::Result;
use mcp_forecast_dashboard::{ForecastConfig, ForecastDashboard};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_forecast_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ForecastConfig::from_env()?;

    tracing::info!("Starting MCP forecast dashboard against {}", config.api_base);

    let dashboard = ForecastDashboard::new(config)?;
    let server = dashboard.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
