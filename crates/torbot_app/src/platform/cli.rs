use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use client_logging::LogDestination;
use serde::Deserialize;

/// Submit a website to the TorBot crawler service and browse the links it found.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "torbot", version, about)]
pub struct Cli {
    /// Crawler service endpoint, e.g. http://localhost:8008/LIVE
    #[arg(long, env = "TORBOT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// RON configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Give up on connecting to the service after this many milliseconds.
    #[arg(long)]
    pub connect_timeout_ms: Option<u64>,

    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace.
    #[arg(long)]
    pub log_level: Option<String>,

    #[arg(long, value_enum)]
    pub log_to: Option<LogTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
