//! Route finding over a [`CampusGraph`]
//!
//! Every entry point takes the graph, two location ids and the accessibility
//! view. An unknown id or an unreachable destination yields `None`; neither is
//! an error. A route from a location to itself is the single-node route with
//! distance 0.
//!
//! - [`breadth_first`]: fewest hops
//! - [`depth_first`]: first path found by backtracking search
//! - [`all_simple_paths`]: every simple path, scored by landmark count
//! - [`shortest_path`]: Dijkstra over path distances

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod path;

use serde::Serialize;

use crate::config::{Algorithm, DepthFirstMode, NavConfig};
use crate::graph::CampusGraph;

pub use bfs::breadth_first;
pub use dfs::{all_simple_paths, depth_first, most_landmarks, AllPaths, ScoredPath};
pub use dijkstra::shortest_path;

/// An ordered walk between two locations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    pub distance: f64,
}

impl Route {
    /// Number of paths traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }
}

/// Knobs for the depth-first algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub depth_first: DepthFirstMode,
    pub max_paths: Option<usize>,
}

impl From<&NavConfig> for SearchOptions {
    fn from(config: &NavConfig) -> Self {
        SearchOptions {
            depth_first: config.depth_first,
            max_paths: config.max_paths,
        }
    }
}

/// Run the selected algorithm
pub fn find_route(
    graph: &CampusGraph,
    algorithm: Algorithm,
    start: &str,
    end: &str,
    accessible_only: bool,
    opts: &SearchOptions,
) -> Option<Route> {
    match algorithm {
        Algorithm::ShortestPath => shortest_path(graph, start, end, accessible_only),
        Algorithm::BreadthFirst => breadth_first(graph, start, end, accessible_only),
        Algorithm::DepthFirst => match opts.depth_first {
            DepthFirstMode::FirstFound => depth_first(graph, start, end, accessible_only),
            DepthFirstMode::MostLandmarks => {
                most_landmarks(graph, start, end, accessible_only, opts.max_paths)
            }
        },
    }
}
