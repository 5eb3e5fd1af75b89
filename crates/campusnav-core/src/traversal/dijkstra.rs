//! Dijkstra shortest path over path distances

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use super::{path, Route};
use crate::graph::{CampusGraph, NodeHandle};

/// Min-heap entry ordered by tentative distance
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeHandle,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Minimum-distance route between two locations.
///
/// Stale heap entries are skipped on pop rather than removed on update. The
/// search stops as soon as the destination is popped.
#[tracing::instrument(skip(graph))]
pub fn shortest_path(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    accessible_only: bool,
) -> Option<Route> {
    let (from, to) = path::endpoints(graph, start, end)?;

    let mut distances = vec![f64::INFINITY; graph.node_count()];
    let mut predecessors: Vec<Option<NodeHandle>> = vec![None; graph.node_count()];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    distances[from.index()] = 0.0;
    heap.push(Reverse(HeapEntry {
        node: from,
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry {
        node: current,
        distance,
    })) = heap.pop()
    {
        if current == to {
            let handles = path::reconstruct(from, to, &predecessors);
            debug!(hops = handles.len() - 1, distance, "route found");
            return Some(path::to_route(graph, &handles, distance));
        }

        if distance > distances[current.index()] {
            continue;
        }

        for adj in graph.adjacent(current, accessible_only) {
            let candidate = distance + adj.weight;
            if candidate < distances[adj.node.index()] {
                distances[adj.node.index()] = candidate;
                predecessors[adj.node.index()] = Some(current);
                heap.push(Reverse(HeapEntry {
                    node: adj.node,
                    distance: candidate,
                }));
            }
        }
    }

    debug!("no route");
    None
}
