//! frame-cache - inspect and clear cached function results

mod cli;
mod logging;

use clap::Parser;
use cli::{Cli, Command};
use frame_cache::{clear_cache, list_entries, CacheConfig, CacheError, ClearOutcome};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    let config = cli.config();
    let result = match cli.command {
        Command::List { json } => list(&config, json),
        Command::Clear => clear(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn list(config: &CacheConfig, json: bool) -> Result<(), CacheError> {
    let entries = list_entries(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &entries)
            .map_err(|e| CacheError::Output(e.to_string()))?;
        writeln!(out).map_err(|e| CacheError::Output(e.to_string()))?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(
            out,
            "{:<24} {}  {:>10}  {}",
            entry.function_name,
            entry.fingerprint,
            entry.size,
            entry.path.display()
        )
        .map_err(|e| CacheError::Output(e.to_string()))?;
    }
    Ok(())
}

fn clear(config: &CacheConfig) -> Result<(), CacheError> {
    match clear_cache(config)? {
        ClearOutcome::Cleared(paths) => println!("Removed {} cached entries", paths.len()),
        ClearOutcome::NothingToClear => println!("No cached entries"),
    }
    Ok(())
}
