//! Paths command: every simple path, ranked by landmarks

use serde_json::json;

use crate::cli::{Cli, OutputFormat, PathsArgs};
use campusnav_core::config::NavConfig;
use campusnav_core::error::Result;
use campusnav_core::graph::CampusGraph;
use campusnav_core::model::CampusData;
use campusnav_core::traversal::all_simple_paths;

/// Execute the paths command
pub fn execute(cli: &Cli, data: &CampusData, config: &NavConfig, args: &PathsArgs) -> Result<()> {
    let graph = CampusGraph::build(data);
    let accessible_only = args.accessible || config.accessible_only;
    let limit = args.max_paths.or(config.max_paths);

    let all = all_simple_paths(&graph, &args.from, &args.to, accessible_only, limit);
    let best = all
        .best()
        .and_then(|best| all.paths.iter().position(|p| std::ptr::eq(p, best)));

    match cli.format {
        OutputFormat::Json => {
            let paths: Vec<serde_json::Value> = all
                .paths
                .iter()
                .map(|p| {
                    json!({
                        "nodes": p.route.nodes,
                        "distance": p.route.distance,
                        "hops": p.route.hops(),
                        "landmarks": p.landmarks,
                    })
                })
                .collect();
            let output = json!({
                "from": args.from,
                "to": args.to,
                "accessible_only": accessible_only,
                "count": all.len(),
                "truncated": all.truncated,
                "best": best,
                "paths": paths,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if all.is_empty() {
                println!("No paths from {} to {}", args.from, args.to);
                return Ok(());
            }
            for (i, p) in all.paths.iter().enumerate() {
                let marker = if Some(i) == best { "*" } else { " " };
                println!(
                    "{}{:>3}. {} (distance {:.1}, {} landmarks)",
                    marker,
                    i + 1,
                    p.route.nodes.join(" -> "),
                    p.route.distance,
                    p.landmarks
                );
            }
            if all.truncated && !cli.quiet {
                println!("(stopped after {} paths)", all.len());
            }
        }
    }

    Ok(())
}
