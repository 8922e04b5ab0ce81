use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

/// Personal income and expense tracker. Reads one command per line from standard input.
#[derive(Debug, Parser)]
#[command(name = "finsight", version)]
pub struct Cli {
    /// Directory holding the saved table
    #[arg(long, default_value = ".finsight")]
    pub data_dir: PathBuf,
    /// Directory that exports and reports are written to
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,
    /// Log level written to stderr: error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    pub log_level: String,
    /// Keep saves in memory only, for the length of this run
    #[arg(long)]
    pub ephemeral: bool
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
