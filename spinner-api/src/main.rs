use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use spinner_api::{app, build_state, worker};
use spinner_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spinner_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Travel Spinner API on port {}", config.server.port);

    let state = build_state(&config).await.context("Failed to initialise services")?;

    tokio::spawn(worker::start_cleanup_worker(
        state.spin.clone(),
        state.insights.clone(),
        state.metrics.clone(),
        Duration::from_secs(config.session.cleanup_interval_seconds.max(1)),
    ));

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
