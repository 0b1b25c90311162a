use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use tooldir::{
    config::AppConfig,
    server::{build_app, AppState},
};
use tooldir_auth::AdminSecret;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let storage = tool_store::create_storage(&config.storage_config()).map_err(|e| anyhow!(e))?;

    let admin = AdminSecret::new(config.admin_password.clone());
    if !admin.is_configured() {
        warn!("ADMIN_PASSWORD is not set; mutating endpoints will report a configuration error");
    }

    let state = Arc::new(AppState { storage, admin });
    let app = build_app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, backend = ?config.backend, "Tool directory listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        warn!("Failed to install ctrl-c handler; running without graceful shutdown");
        std::future::pending::<()>().await;
    }
}
