//! roofscan API server binary.

use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use roofscan_server::{create_router, AppState, ServerConfig};

/// Roof area estimation and climate yield API server.
#[derive(Debug, Parser)]
#[command(name = "roofscan", version, about)]
struct Opts {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "roofscan_server=info,roofscan_climate=info,tower_http=info,warn".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opts = Opts::parse();
    let config = ServerConfig::from_env()?;

    tracing::info!(
        power_base = %config.power_base,
        runoff_coeff = config.runoff_coeff,
        "configuration loaded"
    );
    if config.static_map_key.is_none() {
        tracing::warn!("STATIC_MAP_KEY is not set; /api/satellite and /api/area will fail");
    }
    if config.geocoding_key.is_none() {
        tracing::warn!("GEOCODING_KEY is not set; /api/geocode will fail");
    }

    let state = AppState::new(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(opts.bind).await?;
    tracing::info!("listening on {}", opts.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
