//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use frame_cache::config::{CacheConfig, DEFAULT_CACHE_DIR};
use std::path::PathBuf;
use tracing::Level;

/// Inspect and clear a frame cache directory
#[derive(Parser, Debug)]
#[command(name = "frame-cache")]
#[command(version)]
#[command(about = "Inspect and clear cached function results", long_about = None)]
pub struct Cli {
    /// Cache directory
    #[arg(long = "cache-dir", value_name = "DIR", default_value = DEFAULT_CACHE_DIR, global = true)]
    pub cache_dir: PathBuf,

    /// Show debug diagnostics
    #[arg(short = 'v', long = "verbose", global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List cached entries
    List {
        /// Output as JSON
        #[arg(long = "json")]
        json: bool,
    },
    /// Remove every cached entry
    Clear,
}

impl Cli {
    /// Cache configuration selected on the command line
    pub fn config(&self) -> CacheConfig {
        CacheConfig::with_dir(&self.cache_dir)
    }

    /// Diagnostic level selected on the command line
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::INFO
        }
    }
}
