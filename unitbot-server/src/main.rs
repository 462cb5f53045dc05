//! Unitbot Server
//!
//! Hosts the chat handlers behind a line-delimited JSON protocol:
//! - stdin: one message per line (`content`, `display_recipient`, `subject`)
//! - stdout: one reply command per line (`type`, `to`, `subject`, `content`)
//!
//! Logs go to stderr so they never mix with replies.

mod config;
mod server;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unitbot_plugin::HandlerRegistry;

use crate::config::ServerConfig;
use crate::server::{serve, JsonLineSink, ServerError};

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(config: &ServerConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Registry with every handler this server hosts
fn create_registry() -> HandlerRegistry {
    unitbot_units::load_converter(HandlerRegistry::new())
}

fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();
    init_logging(&config)?;

    let registry = create_registry();
    info!(version = SERVER_VERSION, "unitbot server started");
    for meta in registry.list_handlers() {
        info!(handler = meta.name, trigger = meta.trigger, "handler loaded");
    }

    let stdin = io::stdin();
    let mut sink = JsonLineSink::new(io::stdout().lock());
    serve(&registry, stdin.lock(), &mut sink)?;

    info!("server shutting down");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(ServerError::LogFilter(e)) => {
            // Logging is not up yet
            eprintln!("unitbot-server: invalid log filter: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}
