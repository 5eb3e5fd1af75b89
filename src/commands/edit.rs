//! Edit commands: mutate the map document and save it in place
//!
//! A missing map file is treated as an empty map and created on save.

use serde_json::{json, Value};
use tracing::info;

use crate::cli::{Cli, EditCommands, OutputFormat};
use campusnav_core::error::{NavError, Result};
use campusnav_core::model::{CampusData, Location};

/// Execute an edit subcommand
pub fn execute(cli: &Cli, command: &EditCommands) -> Result<()> {
    let mut data = match CampusData::load(&cli.map) {
        Ok(data) => data,
        Err(NavError::MapNotFound { .. }) => {
            info!(map = %cli.map.display(), "no saved map, starting empty");
            CampusData::new()
        }
        Err(e) => return Err(e),
    };
    let (message, output) = apply(&mut data, command)?;
    data.save(&cli.map)?;
    info!(map = %cli.map.display(), revision = data.revision(), "saved map");

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", message);
            }
        }
    }
    Ok(())
}

fn apply(data: &mut CampusData, command: &EditCommands) -> Result<(String, Value)> {
    match command {
        EditCommands::AddLocation {
            name,
            x,
            y,
            id,
            full_name,
            kind,
            inaccessible,
        } => {
            let id = id.clone().unwrap_or_else(|| data.next_building_id());
            let mut location = Location::new(id.as_str(), name.as_str(), *x, *y)
                .with_kind(*kind)
                .with_accessible(!inaccessible);
            if let Some(full_name) = full_name {
                location = location.with_full_name(full_name.as_str());
            }
            data.add_location(location)?;
            Ok((format!("added {}", id), json!({ "added": id })))
        }

        EditCommands::AddWaypoint { x, y, inaccessible } => {
            let id = data.add_waypoint(*x, *y, !inaccessible)?;
            Ok((format!("added {}", id), json!({ "added": id })))
        }

        EditCommands::Connect {
            from,
            to,
            inaccessible,
        } => {
            let distance = data.connect(from, to, !inaccessible)?;
            Ok((
                format!("connected {} -- {} ({:.1})", from, to, distance),
                json!({ "start_id": from, "end_id": to, "distance": distance }),
            ))
        }

        EditCommands::RemoveLocation { id } => {
            let before = data.path_count();
            data.remove_location(id)
                .ok_or_else(|| NavError::UnknownLocation { id: id.clone() })?;
            let removed_paths = before - data.path_count();
            Ok((
                format!("removed {} and {} path(s)", id, removed_paths),
                json!({ "removed": id, "removed_paths": removed_paths }),
            ))
        }

        EditCommands::RemovePath { from, to } => {
            let path = data
                .remove_path(from, to)
                .ok_or_else(|| path_not_found(from, to))?;
            Ok((
                format!("removed path {} -- {}", path.start_id, path.end_id),
                json!({ "removed": path }),
            ))
        }

        EditCommands::ToggleAccess { from, to } => {
            let accessible = data
                .toggle_path_accessibility(from, to)
                .ok_or_else(|| path_not_found(from, to))?;
            let state = if accessible {
                "accessible"
            } else {
                "inaccessible"
            };
            Ok((
                format!("{} -- {} is now {}", from, to, state),
                json!({ "start_id": from, "end_id": to, "is_accessible": accessible }),
            ))
        }

        EditCommands::RecomputeDistances => {
            let changed = data.recompute_distances();
            Ok((
                format!("updated {} path distance(s)", changed),
                json!({ "updated": changed }),
            ))
        }
    }
}

fn path_not_found(start: &str, end: &str) -> NavError {
    NavError::PathNotFound {
        start: start.to_string(),
        end: end.to_string(),
    }
}
