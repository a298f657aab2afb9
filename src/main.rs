//! fengshui-coach command line.
//!
//! Usage:
//!   fengshui-coach serve                 # HTTP API on the configured address
//!   fengshui-coach serve --port 8080     # override the port
//!   fengshui-coach check room.json       # validate a saved layout offline

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fengshui_coach::api::ApiServer;
use fengshui_coach::{AppConfig, PlacementValidator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fengshui-coach",
    version,
    about = "Feng Shui room simulator and quiz backend"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "FENGSHUI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind, overrides the configuration file
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides the configuration file
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate a room layout stored as JSON and print the feedback
    Check {
        /// JSON file mapping item names to {row, col}
        file: PathBuf,
        /// Reject furniture placed outside the grid
        #[arg(long)]
        strict: bool,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = AppConfig::load_with_source(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_logging(&config.logging.level);
    match &source {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::debug!("No configuration file found, using defaults"),
    }

    match cli.command {
        Command::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let server = ApiServer::from_app_config(config)?;
            server
                .run_with_shutdown(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!("Failed to listen for shutdown signal: {}", e);
                        std::future::pending::<()>().await;
                    }
                    tracing::info!("Shutdown signal received");
                })
                .await
        }
        Command::Check { file, strict } => {
            let validator = PlacementValidator::new(strict || config.placement.strict_bounds);
            let result = validator
                .evaluate_file(&file)
                .with_context(|| format!("Failed to check {}", file.display()))?;
            for line in &result.feedback {
                println!("{}", line);
            }
            if !result.valid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
