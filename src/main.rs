//! Catalog Insights - product catalog summary server
//!
//! Cleans `data/amazon.csv` at startup and serves `/` and `/api/analyze`.

use anyhow::{Context, Result};
use catalog_insights::{analyzer_router, AnalyzerConfig, AppState, DataLoader};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AnalyzerConfig::default();

    // The table is loaded exactly once; failure here aborts startup.
    let table = DataLoader::load_catalog(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;

    let addr = config.bind_addr;
    let router = analyzer_router(AppState::new(table, config));

    tracing::info!(address = %addr, "Starting catalog insights server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
