//! Blazedesk server binary.

use anyhow::{Context, Result};
use blazedesk_core::config::AppConfig;
use blazedesk_server::{AppState, create_router};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Blazedesk - web management backend for Blazegraph
#[derive(Parser, Debug)]
#[command(name = "blazedeskd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "BLAZEDESK_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Blazedesk v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(Path::new(&args.config))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("invalid configuration")?;

    blazedesk_server::metrics::register_metrics();
    tracing::info!("Prometheus metrics registered");

    let metadata = blazedesk_metadata::from_config(&config.metadata)
        .await
        .context("failed to initialize metadata store")?;
    metadata
        .health_check()
        .await
        .context("metadata health check failed")?;
    tracing::info!("Metadata store initialized");

    let triplestore = blazedesk_triplestore::from_config(&config.triplestore)
        .context("failed to initialize triple-store client")?;
    tracing::info!(
        base_url = %config.triplestore.base_url,
        ingest_url = %config.triplestore.ingest_url,
        "Triple-store client initialized"
    );

    let addr: SocketAddr = config.server.bind.parse().context("invalid bind address")?;
    let state = AppState::new(config, metadata, triplestore);
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load configuration: optional TOML file, then `BLAZEDESK_` environment
/// variables (`__` separates nested keys), over built-in defaults.
fn load_config(path: &Path) -> Result<AppConfig> {
    let mut figment = Figment::new();

    if path.exists() {
        tracing::info!(config_path = %path.display(), "Loading configuration from file");
        figment = figment.merge(Toml::file(path));
    } else {
        tracing::info!(
            config_path = %path.display(),
            "No config file found, using defaults and environment"
        );
    }

    figment
        .merge(Env::prefixed("BLAZEDESK_").split("__"))
        .extract()
        .context("failed to load configuration")
}
