//! Breadth-first search: fewest hops

use std::collections::VecDeque;

use tracing::debug;

use super::{path, Route};
use crate::graph::{CampusGraph, NodeHandle};

/// Fewest-hop route between two locations.
///
/// Edge weights play no part in the search. The returned route still reports
/// the summed distance of the paths it uses. Among equal-hop routes the one
/// reached first in neighbor order wins.
#[tracing::instrument(skip(graph))]
pub fn breadth_first(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    accessible_only: bool,
) -> Option<Route> {
    let (from, to) = path::endpoints(graph, start, end)?;

    let mut visited = vec![false; graph.node_count()];
    let mut predecessors: Vec<Option<NodeHandle>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[from.index()] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let handles = path::reconstruct(from, to, &predecessors);
            let distance = path::walk_distance(graph, &handles, accessible_only);
            debug!(hops = handles.len() - 1, distance, "route found");
            return Some(path::to_route(graph, &handles, distance));
        }

        for adj in graph.adjacent(current, accessible_only) {
            if visited[adj.node.index()] {
                continue;
            }
            visited[adj.node.index()] = true;
            predecessors[adj.node.index()] = Some(current);
            queue.push_back(adj.node);
        }
    }

    debug!("no route");
    None
}
