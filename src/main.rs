use anyhow::Context;
use tokio::net::TcpListener;

use people_api::{AppState, Config, routes, seed, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let providers = telemetry::init_telemetry(&config)?;

    let store = seed::load_store(config.seed_file.as_deref()).await?;
    let app = routes::create_router(AppState::new(store));

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(providers) = providers {
        providers.shutdown();
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install CTRL+C signal handler");
        return std::future::pending().await;
    }
    tracing::info!("Shutdown signal received, flushing telemetry...");
}
