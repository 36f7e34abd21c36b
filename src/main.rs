//! Contact Book - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr so the
//! conversation on stdout stays clean.

use anyhow::Result;
use contact_book::{repl, CommandDispatcher, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        max_search_results = config.max_search_results,
        match_threshold = config.match_threshold,
        "Configuration loaded"
    );

    let mut dispatcher = CommandDispatcher::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl::run(&mut dispatcher, stdin.lock(), stdout.lock()) {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
