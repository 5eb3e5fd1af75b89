//! Campusnav - campus map route finding CLI
//!
//! Loads a campus map document and answers route, path and neighbor
//! queries; edits the map in place.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use campusnav_core::error::{ExitCode as NavExitCode, NavError};
use campusnav_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit(NavExitCode::Success),
        Err(e) => {
            match cli.format {
                OutputFormat::Json => eprintln!("{}", e.to_json()),
                OutputFormat::Human if !cli.quiet => eprintln!("error: {}", e),
                OutputFormat::Human => {}
            }
            exit(e.exit_code())
        }
    }
}

/// Report an argument error. With `--format json` on the raw command line
/// the error is written as a JSON envelope; otherwise clap prints it.
fn parse_failure(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !argv_requests_json(std::env::args().skip(1))
    {
        err.exit();
    }
    let error = NavError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    exit(error.exit_code())
}

fn argv_requests_json(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}

fn exit(code: NavExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
