//! Neighbors command

use serde_json::json;

use crate::cli::{Cli, NeighborsArgs, OutputFormat};
use campusnav_core::error::{NavError, Result};
use campusnav_core::graph::CampusGraph;
use campusnav_core::model::CampusData;

/// Execute the neighbors command
pub fn execute(cli: &Cli, data: &CampusData, args: &NeighborsArgs) -> Result<()> {
    let graph = CampusGraph::build(data);
    if !graph.contains(&args.id) {
        return Err(NavError::UnknownLocation {
            id: args.id.clone(),
        });
    }
    let neighbors = graph.neighbors(&args.id, args.accessible);

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = neighbors
                .iter()
                .map(|(id, distance)| json!({ "id": id, "distance": distance }))
                .collect();
            let output = json!({
                "id": args.id,
                "accessible_only": args.accessible,
                "neighbors": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if neighbors.is_empty() {
                if !cli.quiet {
                    println!("No neighbors for {}", args.id);
                }
                return Ok(());
            }
            for (id, distance) in &neighbors {
                println!("{} ({:.1})", id, distance);
            }
        }
    }

    Ok(())
}
