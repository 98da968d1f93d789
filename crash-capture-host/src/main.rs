//! Crash capture host CLI: serves the HTTP ingest/export API, or decodes a
//! record dumped to a file and prints its text report.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crash_capture_host::{api, config::{Command, Config}, decode, ApiState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())))
        .init();

    match Config::from_args().command {
        Command::Serve { listen_addr } => serve(listen_addr).await,
        Command::Decode { path } => decode_file(path),
    }
}

async fn serve(listen_addr: String) -> Result<()> {
    info!("Starting crash-capture-hostd");
    info!(version = env!("CARGO_PKG_VERSION"), "build info");

    let bind_addr: SocketAddr = listen_addr.parse()?;
    let state = ApiState::new();
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(%bind_addr, "crash-capture-hostd listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn decode_file(path: std::path::PathBuf) -> Result<()> {
    let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let record = decode::decode(&bytes).with_context(|| format!("decoding {}", path.display()))?;

    let mut text = String::new();
    crash_capture::report::write_report(&mut text, &record).context("formatting report")?;
    print!("{text}");
    Ok(())
}
