// ABOUTME: Entry point for the agentcore HTTP server.
// ABOUTME: Loads config, builds the agent over the built-in tools, and serves.

use agentcore::tools::builtin_registry;
use agentcore::{AgentClient, Config};
use agentcore_server::{AppState, build_router};
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = Config::from_env().context("loading configuration")?;

    let agent = AgentClient::new(builtin_registry()).with_model_id(&config.model_id);
    info!(
        model_id = %agent.model_id(),
        tools = ?agent.registry().list(),
        "agent ready"
    );

    let app = build_router(AppState::new(agent));

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    info!("Hospital Agent API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
