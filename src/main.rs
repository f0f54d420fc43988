use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use card_price_bot::{config::Config, routes, server, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let state = Arc::new(AppState::new(&config));
    let app = routes::create_router().with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    tracing::info!(%addr, "starting server");
    server::serve(listener, app, server::shutdown_signal(), config.shutdown_timeout)
        .await
        .context("server exited")?;

    Ok(())
}
