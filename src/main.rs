use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use stepviz::{run_server, Config, WebAppState};

/// Step-trace engine and web API for algorithm visualization.
#[derive(Parser)]
#[command(name = "stepviz", version, about)]
struct Cli {
    /// Host address to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let state = WebAppState::new(config);
    run_server(state).await
}
