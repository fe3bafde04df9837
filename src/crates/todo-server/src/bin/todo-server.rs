//! Todo server binary
//!
//! Loads configuration, opens the store, and serves the REST API until
//! Ctrl-C or SIGTERM.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use todo_server::api::{build_app, AppState};
use todo_server::config::ServerConfig;
use todo_server::db::{open_store, seed::seed_sample_data};
use todo_server::version::{PKG_NAME, VERSION};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "todo-server")]
#[command(about = "REST API for the todo tracker", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config and HOST)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Store URL; `memory` selects the in-process store
    #[arg(long)]
    database_url: Option<String>,

    /// Insert sample todos into an empty store
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    tracing::info!("Loading server configuration...");
    let mut config = ServerConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    if args.seed {
        config.server.seed_sample_data = true;
    }
    config.validate()?;

    tracing::info!("Environment: {}", config.server.environment);
    tracing::info!("Database URL: {}", config.database.url);

    let store = open_store(&config.database.url, config.database.max_connections)
        .await
        .context("failed to open todo store")?;

    tracing::info!("Performing database health check");
    store.health_check().await?;

    if config.server.seed_sample_data {
        let inserted = seed_sample_data(store.as_ref()).await?;
        if inserted > 0 {
            tracing::info!("Seeded {} sample todos", inserted);
        }
    }

    let state = AppState::new(store, config.server.environment.clone());
    let app = build_app(state, &config.cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(
        "Starting {} v{} on {}",
        PKG_NAME,
        VERSION,
        listener.local_addr()?
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Todo server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
