//! CLI argument parsing for campusnav
//!
//! Global flags: --map, --config, --format, --quiet, --verbose

pub mod args;
pub mod edit;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{LocateArgs, NeighborsArgs, PathsArgs, RouteArgs, SessionArgs};
pub use edit::EditCommands;
pub use campusnav_core::format::OutputFormat;

use parse::parse_format;

/// Campusnav - campus map route finding
#[derive(Parser, Debug)]
#[command(name = "campusnav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Campus map document (JSON)
    #[arg(long, global = true, env = "CAMPUSNAV_MAP", default_value = "campus.json")]
    pub map: PathBuf,

    /// Navigation config (TOML); defaults to ./campusnav.toml when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level campusnav commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two locations
    Route(RouteArgs),

    /// List every simple path between two locations, ranked by landmarks
    Paths(PathsArgs),

    /// Show the neighbors of a location
    Neighbors(NeighborsArgs),

    /// List all locations
    Locations,

    /// Find the location or path nearest a map point
    Locate(LocateArgs),

    /// Check the map for connection/path inconsistencies
    Check,

    /// Run a navigation session reading commands from stdin
    Session(SessionArgs),

    /// Edit the map document in place
    Edit {
        #[command(subcommand)]
        command: EditCommands,
    },
}
