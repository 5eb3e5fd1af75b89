//! Locations command

use crate::cli::{Cli, OutputFormat};
use campusnav_core::error::Result;
use campusnav_core::model::CampusData;

/// Execute the locations command
pub fn execute(cli: &Cli, data: &CampusData) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data.locations())?);
        }
        OutputFormat::Human => {
            if data.locations().is_empty() {
                if !cli.quiet {
                    println!("No locations");
                }
                return Ok(());
            }
            for location in data.locations() {
                let access = if location.is_accessible {
                    ""
                } else {
                    " (inaccessible)"
                };
                println!(
                    "{}  {}  ({:.3}, {:.3}) [{}]{}",
                    location.id,
                    location.label(),
                    location.x,
                    location.y,
                    location.kind,
                    access
                );
            }
        }
    }
    Ok(())
}
