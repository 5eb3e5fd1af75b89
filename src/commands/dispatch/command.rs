//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use campusnav_core::config::{NavConfig, CONFIG_FILE_NAME};
use campusnav_core::error::Result;
use campusnav_core::model::CampusData;
use campusnav_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the map named by `--map`
    pub fn load_map(&self) -> Result<CampusData> {
        let data = CampusData::load(&self.cli.map)?;
        trace_time!(
            self.start,
            "load_map",
            locations = data.location_count(),
            paths = data.path_count()
        );
        Ok(data)
    }

    /// Load `--config`, or `./campusnav.toml` if present, or defaults
    pub fn load_config(&self) -> Result<NavConfig> {
        match &self.cli.config {
            Some(path) => NavConfig::load(path),
            None => NavConfig::load_or_default(&PathBuf::from(CONFIG_FILE_NAME)),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("campusnav {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route finding over a campus map.");
        println!();
        println!("Run `campusnav --help` for usage information.");
        Ok(())
    }
}
