mod error;
mod routes;
mod server_config;
use server_config::ServerConfig;

use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bank_ledger::Ledger;

const SERVER_CONFIG: &str = "resources/server.toml";

#[derive(Parser, Debug)]
#[clap(version, about = "Serve a ledger of named accounts over HTTP")]
struct Args {
    /// Path to the server configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,
}

fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ServerConfig::read(path)?,
        None => ServerConfig::read_or_default(SERVER_CONFIG)?,
    };
    init_logging(&config);

    let (host, port) = config.listen_addr();
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {}:{}", host, port))?;
    log::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, routes::app(Ledger::new()))
        .await
        .with_context(|| "server terminated")?;
    Ok(())
}
