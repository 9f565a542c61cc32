use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use fable_api::{app, AppState};
use fable_store::{app_config::Config, InMemorySettingsStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fable_api=debug,fable_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Fable API on port {}", config.server.port);

    if config.pricing.service.is_none() {
        tracing::warn!("No service pricing configured; previews will show net prices");
    }
    if config.pricing.library.is_none() {
        tracing::warn!("No library pricing configured; previews will show net prices");
    }

    let settings = InMemorySettingsStore::seeded(&config.pricing)
        .context("Invalid [pricing] configuration")?;
    let settings = Arc::new(settings);
    let app = app(AppState::new(settings));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
