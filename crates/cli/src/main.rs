mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use objscope_core::ServiceConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "objscope", version)]
#[command(about = "Object type counts per package, served from the indexer database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service (default)
    Serve {
        /// Overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
        /// Overrides HOST
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Check database connectivity once
    Ping,
    /// Print object type counts for a package as JSON
    Counts { package_id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    // Before the filter is built so RUST_LOG from .env applies.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(%error, "fatal");
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ServiceConfig::from_env()?;

    match cli.command.unwrap_or(Commands::Serve { port: None, host: None }) {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            commands::serve::run(config).await
        },
        Commands::Ping => commands::ping::run(config).await,
        Commands::Counts { package_id } => commands::counts::run(config, package_id).await,
    }
}
