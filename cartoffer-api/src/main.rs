use std::net::SocketAddr;

use anyhow::Context;
use cartoffer_api::{app, shutdown, AppState};
use cartoffer_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cartoffer_api=debug,cartoffer_offer=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting cart offer API on port {}", config.server.port);

    let repo = cartoffer_store::offer_repository(&config.store).context("Failed to set up offer store")?;
    let segments =
        cartoffer_store::segment_resolver(&config.segments).context("Failed to set up segment resolver")?;

    let app = app(AppState::new(repo, segments));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown::signal().await {
                tracing::error!("Shutdown signal handler failed: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
