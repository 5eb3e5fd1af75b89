//! Read-only adjacency index over a campus snapshot
//!
//! `CampusGraph` is built once from `CampusData` and never mutated. Nodes live
//! in an arena addressed by [`NodeHandle`]; each node's adjacency list keeps
//! path-insertion order, which fixes the tie-breaking order of every
//! traversal. The accessible-only view is a filter over the same lists.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::CampusData;

/// Index of a node in the graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One direction of an undirected path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent {
    pub node: NodeHandle,
    pub weight: f64,
    pub accessible: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    id: String,
    landmark: bool,
}

/// Immutable adjacency snapshot of a campus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampusGraph {
    nodes: Vec<Node>,
    lookup: HashMap<String, NodeHandle>,
    adjacency: Vec<Vec<Adjacent>>,
    revision: u64,
}

impl CampusGraph {
    /// Build the index in O(locations + paths)
    pub fn build(data: &CampusData) -> Self {
        let mut graph = CampusGraph {
            nodes: Vec::with_capacity(data.location_count()),
            lookup: HashMap::with_capacity(data.location_count()),
            adjacency: Vec::with_capacity(data.location_count()),
            revision: data.revision(),
        };

        for location in data.locations() {
            let handle = NodeHandle(graph.nodes.len());
            graph.nodes.push(Node {
                id: location.id.clone(),
                landmark: location.is_landmark(),
            });
            graph.lookup.insert(location.id.clone(), handle);
            graph.adjacency.push(Vec::new());
        }

        for path in data.paths() {
            let (Some(a), Some(b)) = (graph.handle(&path.start_id), graph.handle(&path.end_id))
            else {
                warn!(start = %path.start_id, end = %path.end_id, "skipping dangling path");
                continue;
            };
            graph.adjacency[a.0].push(Adjacent {
                node: b,
                weight: path.distance,
                accessible: path.is_accessible,
            });
            graph.adjacency[b.0].push(Adjacent {
                node: a,
                weight: path.distance,
                accessible: path.is_accessible,
            });
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(false),
            revision = graph.revision,
            "build_graph"
        );
        graph
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    pub fn handle(&self, id: &str) -> Option<NodeHandle> {
        self.lookup.get(id).copied()
    }

    /// Identifier of a node. Handles only come from this graph.
    pub fn id(&self, handle: NodeHandle) -> &str {
        &self.nodes[handle.0].id
    }

    /// Whether the node counts toward a route's landmark score
    pub fn is_landmark(&self, handle: NodeHandle) -> bool {
        self.nodes[handle.0].landmark
    }

    pub fn handles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        (0..self.nodes.len()).map(NodeHandle)
    }

    /// Adjacency of a node under the given view, in path-insertion order
    pub fn adjacent(
        &self,
        handle: NodeHandle,
        accessible_only: bool,
    ) -> impl Iterator<Item = &Adjacent> + '_ {
        self.adjacency[handle.0]
            .iter()
            .filter(move |adj| !accessible_only || adj.accessible)
    }

    /// Neighbors of `id` with edge weights. Empty for an unknown id.
    pub fn neighbors(&self, id: &str, accessible_only: bool) -> Vec<(String, f64)> {
        let Some(handle) = self.handle(id) else {
            return Vec::new();
        };
        self.adjacent(handle, accessible_only)
            .map(|adj| (self.id(adj.node).to_string(), adj.weight))
            .collect()
    }

    /// Weight of the edge joining two adjacent nodes under the given view
    pub fn weight_between(&self, a: NodeHandle, b: NodeHandle, accessible_only: bool) -> Option<f64> {
        self.adjacent(a, accessible_only)
            .find(|adj| adj.node == b)
            .map(|adj| adj.weight)
    }

    /// Number of undirected edges visible under the given view
    pub fn edge_count(&self, accessible_only: bool) -> usize {
        self.handles()
            .map(|h| self.adjacent(h, accessible_only).count())
            .sum::<usize>()
            / 2
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Revision of the `CampusData` this snapshot was built from
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether `data` has been mutated since this snapshot was built
    pub fn is_stale(&self, data: &CampusData) -> bool {
        data.revision() != self.revision
    }
}

#[cfg(test)]
mod tests;
