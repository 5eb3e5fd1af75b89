//! Command implementations for all campusnav commands

use std::io;

use tracing::debug;

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use campusnav_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Route(args) => {
                let data = ctx.load_map()?;
                let config = ctx.load_config()?;
                commands::route::execute(ctx.cli, &data, &config, args)
            }
            Commands::Paths(args) => {
                let data = ctx.load_map()?;
                let config = ctx.load_config()?;
                commands::paths::execute(ctx.cli, &data, &config, args)
            }
            Commands::Neighbors(args) => {
                let data = ctx.load_map()?;
                commands::neighbors::execute(ctx.cli, &data, args)
            }
            Commands::Locations => {
                let data = ctx.load_map()?;
                commands::locations::execute(ctx.cli, &data)
            }
            Commands::Locate(args) => {
                let data = ctx.load_map()?;
                commands::locate::execute(ctx.cli, &data, args)
            }
            Commands::Check => commands::check::execute(ctx.cli),
            Commands::Session(args) => {
                let data = ctx.load_map()?;
                let config = ctx.load_config()?;
                let stdin = io::stdin();
                commands::session::execute(ctx.cli, &data, &config, args, stdin.lock())
            }
            Commands::Edit { command } => commands::edit::execute(ctx.cli, command),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
