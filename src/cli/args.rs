//! Query command argument structures

use clap::Args;

use crate::cli::parse::{parse_algorithm, parse_max_paths};
use campusnav_core::config::Algorithm;

/// Arguments for the route command.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Start location ID
    pub from: String,

    /// Destination location ID
    pub to: String,

    /// Algorithm (shortest-path, breadth-first, depth-first)
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Use accessible paths only
    #[arg(long)]
    pub accessible: bool,
}

/// Arguments for the paths command.
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Start location ID
    pub from: String,

    /// Destination location ID
    pub to: String,

    /// Use accessible paths only
    #[arg(long)]
    pub accessible: bool,

    /// Stop after this many paths
    #[arg(long, value_parser = parse_max_paths)]
    pub max_paths: Option<usize>,
}

/// Arguments for the neighbors command.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    /// Location ID
    pub id: String,

    /// Use accessible paths only
    #[arg(long)]
    pub accessible: bool,
}

/// Arguments for the locate command.
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Normalized x coordinate
    #[arg(long)]
    pub x: f64,

    /// Normalized y coordinate
    #[arg(long)]
    pub y: f64,

    /// Hit-test radius in normalized units
    #[arg(long, default_value_t = campusnav_core::model::DEFAULT_PICK_RADIUS)]
    pub radius: f64,
}

/// Arguments for the session command.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Initial algorithm (overrides config)
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Start in accessible-only mode
    #[arg(long)]
    pub accessible: bool,
}
