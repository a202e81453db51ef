//! Contact directory CLI entry point.
//!
//! # Responsibility
//! - Resolve configuration and initialize logging.
//! - Run one interactive session on stdin/stdout.

mod args;
mod menu;
mod prompt;
mod render;

use anyhow::{Context, Result};
use args::CliArgs;
use clap::Parser;
use contactbook_core::{
    init_logging, ContactService, InMemoryContactRepository, LogConfig, LoggingError,
};
use menu::Session;
use std::io::{self, Write};

fn start_logging(args: &CliArgs) -> Result<(), LoggingError> {
    let config = LogConfig::new(args.log_level(), args.log_dir())?;
    let active = init_logging(&config)?;
    log::info!(
        "event=cli_start module=cli status=ok level={} max_contacts={:?}",
        active.level(),
        args.max_contacts
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    if !args.no_log {
        // Logging is optional for an interactive session.
        if let Err(err) = start_logging(&args) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let repo = match args.max_contacts {
        Some(limit) => InMemoryContactRepository::with_capacity_limit(limit as usize),
        None => InMemoryContactRepository::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), ContactService::new(repo));
    session.run().context("contact session failed")?;

    let (service, mut out) = session.into_parts();
    log::info!(
        "event=app_exit module=cli status=ok contacts={}",
        service.len()
    );
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
