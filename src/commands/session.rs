//! Session command: a line-driven navigation session
//!
//! Commands, one per line:
//! - `select <id>`
//! - `reset`
//! - `algorithm <name>`
//! - `accessible`
//! - `state`
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;

use serde_json::json;
use tracing::warn;

use crate::cli::{Cli, OutputFormat, SessionArgs};
use campusnav_core::bail_usage;
use campusnav_core::config::{Algorithm, NavConfig};
use campusnav_core::error::Result;
use campusnav_core::model::CampusData;
use campusnav_core::session::{NavigationSession, Navigator, SessionEvent};

#[derive(Debug, PartialEq)]
enum SessionCommand {
    Select(String),
    Reset,
    Algorithm(Algorithm),
    Accessible,
    State,
}

fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let operand = words.next();

    let command = match (verb, operand) {
        ("select", Some(id)) => SessionCommand::Select(id.to_string()),
        ("reset", None) => SessionCommand::Reset,
        ("algorithm", Some(name)) => SessionCommand::Algorithm(name.parse()?),
        ("accessible", None) => SessionCommand::Accessible,
        ("state", None) => SessionCommand::State,
        _ => bail_usage!(format!("unrecognized session command: {}", line)),
    };
    Ok(Some(command))
}

/// Execute the session command, reading commands from `input`
pub fn execute<R: BufRead>(
    cli: &Cli,
    data: &CampusData,
    config: &NavConfig,
    args: &SessionArgs,
    input: R,
) -> Result<()> {
    let mut navigator = Navigator::new(data, config);
    if let Some(algorithm) = args.algorithm {
        navigator.set_algorithm(algorithm);
    }
    if args.accessible {
        navigator.set_accessible_only(true);
    }

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = %line, "bad session command");
                match cli.format {
                    OutputFormat::Json => println!("{}", e.to_json()),
                    OutputFormat::Human => println!("error: {}", e),
                }
                continue;
            }
        };

        match command {
            SessionCommand::Select(id) => print_event(cli, &navigator.select(&id))?,
            SessionCommand::Reset => print_event(cli, &navigator.reset())?,
            SessionCommand::Algorithm(algorithm) => {
                print_event(cli, &navigator.set_algorithm(algorithm))?
            }
            SessionCommand::Accessible => print_event(cli, &navigator.toggle_accessibility())?,
            SessionCommand::State => print_state(cli, navigator.session())?,
        }
    }

    Ok(())
}

fn print_event(cli: &Cli, event: &SessionEvent) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(event)?),
        OutputFormat::Human => println!("{}", event),
    }
    Ok(())
}

fn print_state(cli: &Cli, session: &NavigationSession) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "event": "state",
                "state": session.state(),
                "start": session.start(),
                "end": session.end(),
                "algorithm": session.algorithm(),
                "accessible_only": session.accessible_only(),
                "route": session.result(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "state: {}, start: {}, end: {}, algorithm: {}, accessible only: {}",
                session.state(),
                session.start().unwrap_or("-"),
                session.end().unwrap_or("-"),
                session.algorithm(),
                session.accessible_only()
            );
        }
    }
    Ok(())
}
