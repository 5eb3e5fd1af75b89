//! Route command

use serde_json::json;

use crate::cli::{Cli, OutputFormat, RouteArgs};
use campusnav_core::config::NavConfig;
use campusnav_core::error::Result;
use campusnav_core::model::CampusData;
use campusnav_core::session::{Navigator, SessionEvent};
use campusnav_core::traversal::Route;

/// Execute the route command by driving a navigation session
pub fn execute(cli: &Cli, data: &CampusData, config: &NavConfig, args: &RouteArgs) -> Result<()> {
    let mut navigator = Navigator::new(data, config);
    if let Some(algorithm) = args.algorithm {
        navigator.set_algorithm(algorithm);
    }
    if args.accessible {
        navigator.set_accessible_only(true);
    }

    let mut outcome = navigator.select(&args.from);
    if matches!(outcome, SessionEvent::StartSelected { .. }) {
        outcome = navigator.select(&args.to);
    }

    let route = match &outcome {
        SessionEvent::RouteFound { route } => Some(route),
        _ => None,
    };
    let reason = match &outcome {
        SessionEvent::Ignored { reason } => Some(reason.to_string()),
        _ => None,
    };
    let session = navigator.session();

    match cli.format {
        OutputFormat::Json => {
            let mut output = json!({
                "from": args.from,
                "to": args.to,
                "algorithm": session.algorithm(),
                "accessible_only": session.accessible_only(),
                "found": route.is_some(),
            });
            if let Some(obj) = output.as_object_mut() {
                if let Some(route) = route {
                    obj.insert("nodes".to_string(), json!(route.nodes));
                    obj.insert("distance".to_string(), json!(route.distance));
                    obj.insert("hops".to_string(), json!(route.hops()));
                }
                if let Some(reason) = &reason {
                    obj.insert("reason".to_string(), json!(reason));
                }
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match route {
            Some(route) => output_route_human(cli, data, route),
            None => {
                println!("No route from {} to {}", args.from, args.to);
                if let Some(reason) = reason {
                    if !cli.quiet {
                        println!("  ({})", reason);
                    }
                }
            }
        },
    }

    Ok(())
}

fn output_route_human(cli: &Cli, data: &CampusData, route: &Route) {
    println!("{}", route.nodes.join(" -> "));
    println!("distance: {:.1} ({} hops)", route.distance, route.hops());

    if cli.quiet {
        return;
    }
    for id in &route.nodes {
        if let Some(location) = data.location(id) {
            if location.is_landmark() {
                println!("  {}  {}", id, location.label());
            }
        }
    }
}
