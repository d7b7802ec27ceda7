//! CLI module for rosterdb
//!
//! Parses arguments, loads configuration, and runs the serving loop. All
//! process setup (tracing subscriber, tokio runtime) happens here so that
//! `main.rs` stays a thin dispatcher.

mod args;
mod errors;

pub use args::{Cli, Command};
pub use errors::{CliError, CliResult};

use crate::http_server::{HttpServer, HttpServerConfig};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            port,
            data_dir,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "rosterdb=info,tower_http=info".into()),
                )
                .init();

            let mut config = match config {
                Some(path) => HttpServerConfig::load(&path)?,
                None => HttpServerConfig::default(),
            };
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(data_dir) = data_dir {
                config.data_dir = data_dir;
            }

            let server = HttpServer::with_config(config);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server.start())?;
            Ok(())
        }
    }
}
