//! Edit subcommands for changing the map document

use clap::Subcommand;

use super::parse::parse_location_kind;
use campusnav_core::model::LocationKind;

/// Edit subcommands
#[derive(Subcommand, Debug)]
pub enum EditCommands {
    /// Add a location
    AddLocation {
        /// Short display name
        #[arg(long)]
        name: String,

        /// Normalized x coordinate
        #[arg(long)]
        x: f64,

        /// Normalized y coordinate
        #[arg(long)]
        y: f64,

        /// Location ID (default: next free node_<n>)
        #[arg(long)]
        id: Option<String>,

        /// Full display name
        #[arg(long)]
        full_name: Option<String>,

        /// Location kind (building, entrance, waypoint)
        #[arg(long, short = 'T', value_parser = parse_location_kind, default_value = "building")]
        kind: LocationKind,

        /// Mark the location as not accessible
        #[arg(long)]
        inaccessible: bool,
    },

    /// Add a routing-only waypoint
    AddWaypoint {
        /// Normalized x coordinate
        #[arg(long)]
        x: f64,

        /// Normalized y coordinate
        #[arg(long)]
        y: f64,

        /// Mark the waypoint as not accessible
        #[arg(long)]
        inaccessible: bool,
    },

    /// Join two locations with a walkway; distance comes from coordinates
    Connect {
        /// First location ID
        from: String,

        /// Second location ID
        to: String,

        /// Mark the path as not accessible
        #[arg(long)]
        inaccessible: bool,
    },

    /// Remove a location and every path touching it
    RemoveLocation {
        /// Location ID
        id: String,
    },

    /// Remove the path between two locations
    RemovePath {
        /// First location ID
        from: String,

        /// Second location ID
        to: String,
    },

    /// Flip the accessibility of a path
    ToggleAccess {
        /// First location ID
        from: String,

        /// Second location ID
        to: String,
    },

    /// Recompute every path distance from coordinates
    RecomputeDistances,
}
