//! Command-line configuration.
//!
//! # Invariants
//! - Every flag has an environment fallback; flags win over the environment.

use clap::Parser;
use contactbook_core::LogLevel;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "contactbook")]
#[command(about = "Interactive in-memory contact directory")]
#[command(version)]
pub struct CliArgs {
    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "CONTACTBOOK_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Directory for rolling log files.
    #[arg(long, env = "CONTACTBOOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Maximum number of contacts the directory accepts.
    #[arg(long, env = "CONTACTBOOK_MAX_CONTACTS", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_contacts: Option<u32>,

    /// Disable file logging.
    #[arg(long)]
    pub no_log: bool,
}

impl CliArgs {
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("contactbook").join("logs"))
    }
}
