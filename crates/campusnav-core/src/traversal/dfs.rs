//! Depth-first search and simple-path enumeration
//!
//! Both searches backtrack over an explicit stack of frames with scoped
//! visited markers: a node is marked when its frame is pushed and unmarked
//! when the frame is popped, so a node is never repeated within one path
//! but may appear on many paths. Path length is not bounded by the call
//! stack.
//!
//! Enumeration is exponential on graphs with cycles. `limit` bounds it.

use std::ops::ControlFlow;

use serde::Serialize;
use tracing::debug;

use super::{path, Route};
use crate::graph::{Adjacent, CampusGraph, NodeHandle};

/// A simple path with its landmark score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPath {
    pub route: Route,
    /// Non-waypoint nodes on the path, endpoints included
    pub landmarks: usize,
}

/// Result of simple-path enumeration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllPaths {
    /// Paths in enumeration order
    pub paths: Vec<ScoredPath>,
    /// Enumeration stopped at the limit
    pub truncated: bool,
}

impl AllPaths {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Paths by descending landmark count; ties keep enumeration order
    pub fn ranked(&self) -> Vec<&ScoredPath> {
        let mut ranked: Vec<&ScoredPath> = self.paths.iter().collect();
        ranked.sort_by(|a, b| b.landmarks.cmp(&a.landmarks));
        ranked
    }

    /// The path with the most landmarks, first enumerated on a tie
    pub fn best(&self) -> Option<&ScoredPath> {
        self.ranked().into_iter().next()
    }
}

/// One node on the current path, with the neighbors not yet tried
struct Frame {
    node: NodeHandle,
    distance: f64,
    untried: std::vec::IntoIter<Adjacent>,
}

struct Search<'g> {
    graph: &'g CampusGraph,
    target: NodeHandle,
    accessible_only: bool,
    visited: Vec<bool>,
    trail: Vec<NodeHandle>,
}

impl<'g> Search<'g> {
    fn new(graph: &'g CampusGraph, target: NodeHandle, accessible_only: bool) -> Self {
        Search {
            graph,
            target,
            accessible_only,
            visited: vec![false; graph.node_count()],
            trail: Vec::new(),
        }
    }

    fn enter(&mut self, node: NodeHandle) {
        self.visited[node.index()] = true;
        self.trail.push(node);
    }

    fn leave(&mut self, node: NodeHandle) {
        self.trail.pop();
        self.visited[node.index()] = false;
    }

    /// Backtrack over every simple path from `start`, calling `on_target`
    /// each time the target is reached with `trail` holding the path.
    /// Stops with the break value; `trail` is then left as it was.
    fn walk<B, F>(&mut self, start: NodeHandle, mut on_target: F) -> Option<B>
    where
        F: FnMut(&Self, f64) -> ControlFlow<B>,
    {
        let mut stack = Vec::new();
        if let ControlFlow::Break(value) = self.arrive(start, 0.0, &mut stack, &mut on_target) {
            return Some(value);
        }

        while let Some(frame) = stack.last_mut() {
            let visited = &self.visited;
            let next = frame.untried.find(|adj| !visited[adj.node.index()]);
            match next {
                Some(adj) => {
                    let distance = frame.distance + adj.weight;
                    if let ControlFlow::Break(value) =
                        self.arrive(adj.node, distance, &mut stack, &mut on_target)
                    {
                        return Some(value);
                    }
                }
                None => {
                    if let Some(done) = stack.pop() {
                        self.leave(done.node);
                    }
                }
            }
        }
        None
    }

    /// Mark `node` as on the path. The target is reported and left at
    /// once; any other node gets a frame.
    fn arrive<B, F>(
        &mut self,
        node: NodeHandle,
        distance: f64,
        stack: &mut Vec<Frame>,
        on_target: &mut F,
    ) -> ControlFlow<B>
    where
        F: FnMut(&Self, f64) -> ControlFlow<B>,
    {
        self.enter(node);
        if node == self.target {
            if let ControlFlow::Break(value) = on_target(&*self, distance) {
                return ControlFlow::Break(value);
            }
            self.leave(node);
        } else {
            let untried: Vec<Adjacent> = self
                .graph
                .adjacent(node, self.accessible_only)
                .copied()
                .collect();
            stack.push(Frame {
                node,
                distance,
                untried: untried.into_iter(),
            });
        }
        ControlFlow::Continue(())
    }

    fn score(&self, distance: f64) -> ScoredPath {
        ScoredPath {
            route: path::to_route(self.graph, &self.trail, distance),
            landmarks: self.trail.iter().filter(|&&h| self.graph.is_landmark(h)).count(),
        }
    }
}

/// First route found by depth-first backtracking, in neighbor order
#[tracing::instrument(skip(graph))]
pub fn depth_first(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    accessible_only: bool,
) -> Option<Route> {
    let (from, to) = path::endpoints(graph, start, end)?;
    let mut search = Search::new(graph, to, accessible_only);
    let distance = search.walk(from, |_, distance| ControlFlow::Break(distance))?;
    Some(path::to_route(graph, &search.trail, distance))
}

/// Every simple path from `start` to `end`, at most `limit` of them
#[tracing::instrument(skip(graph))]
pub fn all_simple_paths(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    accessible_only: bool,
    limit: Option<usize>,
) -> AllPaths {
    let mut found = AllPaths::default();
    let Some((from, to)) = path::endpoints(graph, start, end) else {
        return found;
    };
    let mut search = Search::new(graph, to, accessible_only);
    search.walk(from, |search, distance| {
        if limit.is_some_and(|max| found.paths.len() >= max) {
            found.truncated = true;
            return ControlFlow::Break(());
        }
        found.paths.push(search.score(distance));
        ControlFlow::Continue(())
    });
    debug!(paths = found.len(), truncated = found.truncated, "enumerated");
    found
}

/// The enumerated path passing the most landmarks
pub fn most_landmarks(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    accessible_only: bool,
    limit: Option<usize>,
) -> Option<Route> {
    all_simple_paths(graph, start, end, accessible_only, limit)
        .best()
        .map(|scored| scored.route.clone())
}
