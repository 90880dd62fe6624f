use std::net::SocketAddr;
use std::time::Duration;
use anyhow::Context;
use manazil_api::{app, worker, AppState};
use manazil_store::{Config, SessionRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "manazil_api=debug,manazil_core=debug,manazil_store=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Manazil API on port {}", config.server.port);

    let registry = SessionRegistry::new(config.sessions.max_active)
        .with_idle_ttl(Duration::from_secs(config.sessions.idle_ttl_seconds));
    let app_state = AppState::new(registry);

    tokio::spawn(worker::start_session_sweeper(
        app_state.sessions.clone(),
        Duration::from_secs(config.sessions.sweep_interval_seconds.max(1)),
    ));

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
