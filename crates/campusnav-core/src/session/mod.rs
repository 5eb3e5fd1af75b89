//! Navigation session
//!
//! Tracks the start/end selection, the chosen algorithm and accessibility
//! mode, and the last computed route. The session never owns a graph; the
//! [`Navigator`] pairs one with a graph snapshot.

mod state;

use tracing::debug;

use crate::config::{Algorithm, NavConfig};
use crate::graph::CampusGraph;
use crate::model::CampusData;
use crate::traversal::{find_route, Route, SearchOptions};

pub use state::{IgnoreReason, SessionEvent, SessionState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationSession {
    start: Option<String>,
    end: Option<String>,
    algorithm: Algorithm,
    accessible_only: bool,
    options: SearchOptions,
    result: Option<Route>,
}

impl NavigationSession {
    pub fn new(algorithm: Algorithm, accessible_only: bool) -> Self {
        NavigationSession {
            algorithm,
            accessible_only,
            ..Default::default()
        }
    }

    pub fn from_config(config: &NavConfig) -> Self {
        NavigationSession {
            algorithm: config.algorithm,
            accessible_only: config.accessible_only,
            options: SearchOptions::from(config),
            ..Default::default()
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.start, &self.result) {
            (_, Some(_)) => SessionState::PathComputed,
            (Some(_), None) => SessionState::StartSelected,
            (None, None) => SessionState::Idle,
        }
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn accessible_only(&self) -> bool {
        self.accessible_only
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn result(&self) -> Option<&Route> {
        self.result.as_ref()
    }

    /// Choose the next endpoint.
    ///
    /// Unknown ids and waypoints are ignored, as is any selection while a
    /// route is shown.
    pub fn select(&mut self, graph: &CampusGraph, id: &str) -> SessionEvent {
        if self.state() == SessionState::PathComputed {
            return self.ignore(IgnoreReason::RouteShown);
        }
        let Some(handle) = graph.handle(id) else {
            return self.ignore(IgnoreReason::UnknownLocation(id.to_string()));
        };
        if !graph.is_landmark(handle) {
            return self.ignore(IgnoreReason::Waypoint(id.to_string()));
        }

        if self.start.is_none() {
            debug!(start = id, "select start");
            self.start = Some(id.to_string());
            return SessionEvent::StartSelected {
                start: id.to_string(),
            };
        }

        debug!(end = id, "select end");
        self.end = Some(id.to_string());
        self.compute(graph)
    }

    /// Clear the selection and any route
    pub fn reset(&mut self) -> SessionEvent {
        debug!(state = %self.state(), "reset");
        self.start = None;
        self.end = None;
        self.result = None;
        SessionEvent::Cleared
    }

    pub fn set_algorithm(&mut self, graph: &CampusGraph, algorithm: Algorithm) -> SessionEvent {
        self.algorithm = algorithm;
        self.reconfigured(graph)
    }

    pub fn toggle_accessibility(&mut self, graph: &CampusGraph) -> SessionEvent {
        self.set_accessible_only(graph, !self.accessible_only)
    }

    pub fn set_accessible_only(&mut self, graph: &CampusGraph, accessible_only: bool) -> SessionEvent {
        self.accessible_only = accessible_only;
        self.reconfigured(graph)
    }

    pub fn set_options(&mut self, graph: &CampusGraph, options: SearchOptions) -> SessionEvent {
        self.options = options;
        self.reconfigured(graph)
    }

    /// Re-check the selection against a new graph snapshot. Returns an event
    /// only when the session changed.
    pub fn revalidate(&mut self, graph: &CampusGraph) -> Option<SessionEvent> {
        let vanished = [&self.start, &self.end]
            .into_iter()
            .flatten()
            .any(|id| !graph.contains(id));
        if vanished {
            return Some(self.reset());
        }
        if self.state() == SessionState::PathComputed {
            return Some(self.compute(graph));
        }
        None
    }

    fn reconfigured(&mut self, graph: &CampusGraph) -> SessionEvent {
        debug!(algorithm = %self.algorithm, accessible_only = self.accessible_only, "reconfigure");
        if self.state() == SessionState::PathComputed {
            return self.compute(graph);
        }
        SessionEvent::ConfigUpdated {
            algorithm: self.algorithm,
            accessible_only: self.accessible_only,
        }
    }

    fn compute(&mut self, graph: &CampusGraph) -> SessionEvent {
        let (Some(start), Some(end)) = (self.start.clone(), self.end.clone()) else {
            return self.reset();
        };

        match find_route(
            graph,
            self.algorithm,
            &start,
            &end,
            self.accessible_only,
            &self.options,
        ) {
            Some(route) => {
                debug!(hops = route.hops(), distance = route.distance, "route computed");
                self.result = Some(route.clone());
                SessionEvent::RouteFound { route }
            }
            None => {
                debug!(start = %start, end = %end, "no route, clearing selection");
                self.reset();
                SessionEvent::NoRoute { start, end }
            }
        }
    }

    fn ignore(&self, reason: IgnoreReason) -> SessionEvent {
        debug!(%reason, "selection ignored");
        SessionEvent::Ignored { reason }
    }
}

/// A graph snapshot paired with a session
#[derive(Debug, Clone)]
pub struct Navigator {
    graph: CampusGraph,
    session: NavigationSession,
}

impl Navigator {
    pub fn new(data: &CampusData, config: &NavConfig) -> Self {
        Navigator {
            graph: CampusGraph::build(data),
            session: NavigationSession::from_config(config),
        }
    }

    pub fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    pub fn session(&self) -> &NavigationSession {
        &self.session
    }

    pub fn select(&mut self, id: &str) -> SessionEvent {
        self.session.select(&self.graph, id)
    }

    pub fn reset(&mut self) -> SessionEvent {
        self.session.reset()
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> SessionEvent {
        self.session.set_algorithm(&self.graph, algorithm)
    }

    pub fn toggle_accessibility(&mut self) -> SessionEvent {
        self.session.toggle_accessibility(&self.graph)
    }

    pub fn set_accessible_only(&mut self, accessible_only: bool) -> SessionEvent {
        self.session.set_accessible_only(&self.graph, accessible_only)
    }

    /// Rebuild the snapshot from `data` and swap it in whole. A standing
    /// route is recomputed against the new snapshot.
    pub fn refresh(&mut self, data: &CampusData) -> Option<SessionEvent> {
        let graph = CampusGraph::build(data);
        self.graph = graph;
        self.session.revalidate(&self.graph)
    }
}

#[cfg(test)]
mod tests;
