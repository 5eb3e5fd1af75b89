//! Locate command: hit-test a map point

use serde_json::json;

use crate::cli::{Cli, LocateArgs, OutputFormat};
use campusnav_core::error::Result;
use campusnav_core::model::CampusData;

/// Execute the locate command. Locations win over paths.
pub fn execute(cli: &Cli, data: &CampusData, args: &LocateArgs) -> Result<()> {
    let location = data.location_at(args.x, args.y, args.radius);
    let path = match location {
        Some(_) => None,
        None => data.path_at(args.x, args.y, args.radius),
    };

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "x": args.x,
                "y": args.y,
                "location": location,
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match (location, path) {
            (Some(location), _) => println!("location: {} ({})", location.id, location.label()),
            (None, Some(path)) => {
                let access = if path.is_accessible {
                    "accessible"
                } else {
                    "inaccessible"
                };
                println!(
                    "path: {} -- {} ({:.1}, {}, {})",
                    path.start_id, path.end_id, path.distance, path.path_type, access
                );
            }
            (None, None) => println!("Nothing at ({}, {})", args.x, args.y),
        },
    }

    Ok(())
}
