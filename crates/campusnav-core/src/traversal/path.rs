//! Shared helpers for building routes from arena handles

use tracing::debug;

use super::Route;
use crate::graph::{CampusGraph, NodeHandle};

/// Resolve both endpoints, or `None` if either is unknown
pub(super) fn endpoints(
    graph: &CampusGraph,
    start: &str,
    end: &str,
) -> Option<(NodeHandle, NodeHandle)> {
    match (graph.handle(start), graph.handle(end)) {
        (Some(from), Some(to)) => Some((from, to)),
        _ => {
            debug!(start, end, "unknown endpoint");
            None
        }
    }
}

/// Walk the predecessor chain back from `to`, returning handles in travel order
pub(super) fn reconstruct(
    from: NodeHandle,
    to: NodeHandle,
    predecessors: &[Option<NodeHandle>],
) -> Vec<NodeHandle> {
    let mut handles = vec![to];
    let mut current = to;
    while current != from {
        match predecessors[current.index()] {
            Some(previous) => {
                handles.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    handles.reverse();
    handles
}

/// Sum of edge weights along consecutive handles
pub(super) fn walk_distance(graph: &CampusGraph, handles: &[NodeHandle], accessible_only: bool) -> f64 {
    handles
        .windows(2)
        .filter_map(|pair| graph.weight_between(pair[0], pair[1], accessible_only))
        .sum()
}

pub(super) fn to_route(graph: &CampusGraph, handles: &[NodeHandle], distance: f64) -> Route {
    Route {
        nodes: handles.iter().map(|&h| graph.id(h).to_string()).collect(),
        distance,
    }
}
