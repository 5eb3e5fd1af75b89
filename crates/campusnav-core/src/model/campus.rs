use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use super::edge::Edge;
use super::geometry::{point_segment_distance, scaled_distance};
use super::location::{Location, WAYPOINT_PREFIX};
use crate::bail_invalid;
use crate::error::{NavError, Result};

/// Default pick radius for hit-testing, in normalized units
pub const DEFAULT_PICK_RADIUS: f64 = 0.02;

/// A violation of the connection/edge symmetry invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// `to` lists `from`'s neighbor but `to` does not list `from`
    MissingReciprocal { from: String, to: String },
    /// `from` lists `to` as a connection but no path joins them
    ConnectionWithoutPath { from: String, to: String },
    /// A path exists but `start` does not list `end` as a connection
    PathWithoutConnection { start: String, end: String },
    /// A path references a location that does not exist
    DanglingEndpoint {
        start: String,
        end: String,
        missing: String,
    },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::MissingReciprocal { from, to } => {
                write!(f, "{} lists {} but {} does not list {}", from, to, to, from)
            }
            ConsistencyIssue::ConnectionWithoutPath { from, to } => {
                write!(f, "{} lists {} but no path joins them", from, to)
            }
            ConsistencyIssue::PathWithoutConnection { start, end } => {
                write!(f, "path {} - {} is missing from {}'s connections", start, end, start)
            }
            ConsistencyIssue::DanglingEndpoint {
                start,
                end,
                missing,
            } => write!(f, "path {} - {} references unknown location {}", start, end, missing),
        }
    }
}

/// Registry of campus locations and the paths between them.
///
/// Locations keep insertion order, and so do paths; neighbor enumeration in
/// the graph index follows path insertion order.
#[derive(Debug, Clone, Default)]
pub struct CampusData {
    locations: Vec<Location>,
    lookup: HashMap<String, usize>,
    paths: Vec<Edge>,
    revision: u64,
}

impl CampusData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn paths(&self) -> &[Edge] {
        &self.paths
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.lookup.get(id).map(|&index| &self.locations[index])
    }

    fn location_mut(&mut self, id: &str) -> Option<&mut Location> {
        match self.lookup.get(id) {
            Some(&index) => self.locations.get_mut(index),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Monotonic counter bumped by every successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The path joining `a` and `b` in either orientation
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        self.paths.iter().find(|path| path.joins(a, b))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn reindex(&mut self) {
        self.lookup = self
            .locations
            .iter()
            .enumerate()
            .map(|(index, loc)| (loc.id.clone(), index))
            .collect();
    }

    fn add_connection(&mut self, from: &str, to: &str) {
        if let Some(loc) = self.location_mut(from) {
            if !loc.connections.iter().any(|c| c == to) {
                loc.connections.push(to.to_string());
            }
        }
    }

    fn remove_connection(&mut self, from: &str, to: &str) {
        if let Some(loc) = self.location_mut(from) {
            loc.connections.retain(|c| c != to);
        }
    }

    /// Add a location. Duplicate identifiers are rejected.
    ///
    /// Connections carried by `location` are discarded; they are derived
    /// from paths only.
    pub fn add_location(&mut self, mut location: Location) -> Result<()> {
        if self.contains(&location.id) {
            return Err(NavError::already_exists("location", &location.id));
        }
        if !location.x.is_finite() || !location.y.is_finite() {
            bail_invalid!(
                "coordinates",
                format!("({}, {}) for {}", location.x, location.y, location.id)
            );
        }

        location.connections.clear();
        debug!(id = %location.id, kind = %location.kind, "add_location");
        self.lookup.insert(location.id.clone(), self.locations.len());
        self.locations.push(location);
        self.touch();
        Ok(())
    }

    /// Add a path between two existing locations.
    ///
    /// Rejects self-loops, unknown endpoints, invalid distances and a second
    /// path between the same unordered pair. A rejected path leaves the
    /// model untouched.
    pub fn add_path(&mut self, edge: Edge) -> Result<()> {
        if edge.start_id == edge.end_id {
            return Err(NavError::SelfLoop {
                id: edge.start_id.clone(),
            });
        }
        for id in [&edge.start_id, &edge.end_id] {
            if !self.contains(id) {
                return Err(NavError::UnknownLocation { id: id.clone() });
            }
        }
        if !edge.distance.is_finite() || edge.distance < 0.0 {
            bail_invalid!("distance", edge.distance);
        }
        // Connection lists mirror the path set
        let joined = self
            .location(&edge.start_id)
            .is_some_and(|loc| loc.connections.contains(&edge.end_id));
        if joined {
            return Err(NavError::DuplicatePath {
                start: edge.start_id.clone(),
                end: edge.end_id.clone(),
            });
        }

        debug!(start = %edge.start_id, end = %edge.end_id, distance = edge.distance, "add_path");
        let (start, end) = (edge.start_id.clone(), edge.end_id.clone());
        self.add_connection(&start, &end);
        self.add_connection(&end, &start);
        self.paths.push(edge);
        self.touch();
        Ok(())
    }

    /// Join two locations with a walkway whose distance is computed from
    /// their coordinates. Returns the distance.
    pub fn connect(&mut self, start: &str, end: &str, accessible: bool) -> Result<f64> {
        let from = self
            .location(start)
            .ok_or_else(|| NavError::UnknownLocation {
                id: start.to_string(),
            })?
            .position();
        let to = self
            .location(end)
            .ok_or_else(|| NavError::UnknownLocation {
                id: end.to_string(),
            })?
            .position();

        let distance = scaled_distance(from, to);
        self.add_path(Edge::new(start, end, distance).with_accessible(accessible))?;
        Ok(distance)
    }

    /// Remove a location together with every path touching it.
    /// Unknown ids are a no-op.
    pub fn remove_location(&mut self, id: &str) -> Option<Location> {
        let index = *self.lookup.get(id)?;

        let before = self.paths.len();
        self.paths.retain(|path| !path.touches(id));
        for loc in &mut self.locations {
            loc.connections.retain(|c| c != id);
        }
        let removed = self.locations.remove(index);
        self.reindex();
        self.touch();

        debug!(id, paths_removed = before - self.paths.len(), "remove_location");
        Some(removed)
    }

    /// Remove the path joining `start` and `end` in either orientation.
    /// Unknown pairs are a no-op.
    pub fn remove_path(&mut self, start: &str, end: &str) -> Option<Edge> {
        let position = self.paths.iter().position(|path| path.joins(start, end))?;
        let edge = self.paths.remove(position);
        self.remove_connection(start, end);
        self.remove_connection(end, start);
        self.touch();

        debug!(start, end, "remove_path");
        Some(edge)
    }

    /// Set the accessibility flag of an existing path. Returns the new flag,
    /// or `None` when no path joins the pair.
    pub fn set_path_accessibility(
        &mut self,
        start: &str,
        end: &str,
        accessible: bool,
    ) -> Option<bool> {
        let path = self.paths.iter_mut().find(|path| path.joins(start, end))?;
        path.is_accessible = accessible;
        self.touch();
        Some(accessible)
    }

    /// Flip the accessibility flag of an existing path.
    pub fn toggle_path_accessibility(&mut self, start: &str, end: &str) -> Option<bool> {
        let current = self.edge_between(start, end)?.is_accessible;
        self.set_path_accessibility(start, end, !current)
    }

    /// Create an unnamed waypoint `waypoint_<n>`, numbered one past the
    /// highest existing waypoint. Returns its id.
    pub fn add_waypoint(&mut self, x: f64, y: f64, accessible: bool) -> Result<String> {
        let next = self
            .locations
            .iter()
            .filter_map(|loc| loc.id.strip_prefix(WAYPOINT_PREFIX))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .map_or(0, |highest| highest + 1);

        let id = format!("{}{}", WAYPOINT_PREFIX, next);
        self.add_location(Location::waypoint(id.clone(), x, y).with_accessible(accessible))?;
        Ok(id)
    }

    /// First free `node_<n>` identifier, starting from the location count.
    pub fn next_building_id(&self) -> String {
        let mut n = self.locations.len();
        loop {
            let id = format!("node_{}", n);
            if !self.contains(&id) {
                return id;
            }
            n += 1;
        }
    }

    /// Recompute every path distance from endpoint coordinates.
    /// Returns the number of paths whose distance changed.
    pub fn recompute_distances(&mut self) -> usize {
        let mut changed = 0;
        for index in 0..self.paths.len() {
            let path = &self.paths[index];
            let distance = match (self.location(&path.start_id), self.location(&path.end_id)) {
                (Some(a), Some(b)) => scaled_distance(a.position(), b.position()),
                _ => continue,
            };
            if (self.paths[index].distance - distance).abs() > f64::EPSILON {
                self.paths[index].distance = distance;
                changed += 1;
            }
        }
        if changed > 0 {
            self.touch();
        }
        changed
    }

    /// Nearest location within `radius` of the normalized point `(x, y)`
    pub fn location_at(&self, x: f64, y: f64, radius: f64) -> Option<&Location> {
        self.locations
            .iter()
            .map(|loc| ((loc.x - x).hypot(loc.y - y), loc))
            .filter(|(distance, _)| *distance < radius)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, loc)| loc)
    }

    /// First path whose segment passes within `threshold` of `(x, y)`
    pub fn path_at(&self, x: f64, y: f64, threshold: f64) -> Option<&Edge> {
        self.paths.iter().find(|path| {
            match (self.location(&path.start_id), self.location(&path.end_id)) {
                (Some(a), Some(b)) => {
                    point_segment_distance((x, y), a.position(), b.position()) < threshold
                }
                _ => false,
            }
        })
    }

    /// Every violation of the connection/edge symmetry invariant.
    /// Empty when the model is consistent.
    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        symmetry_issues(&self.locations, &self.paths)
    }
}

/// Check that connection lists and the edge set describe the same graph.
pub(crate) fn symmetry_issues(locations: &[Location], paths: &[Edge]) -> Vec<ConsistencyIssue> {
    let by_id: HashMap<&str, &Location> = locations.iter().map(|l| (l.id.as_str(), l)).collect();
    let has_edge = |a: &str, b: &str| paths.iter().any(|p| p.joins(a, b));
    let mut issues = Vec::new();

    for path in paths {
        let endpoints = [(&path.start_id, &path.end_id), (&path.end_id, &path.start_id)];
        for (from, to) in endpoints {
            match by_id.get(from.as_str()) {
                None => issues.push(ConsistencyIssue::DanglingEndpoint {
                    start: path.start_id.clone(),
                    end: path.end_id.clone(),
                    missing: from.clone(),
                }),
                Some(loc) if !loc.connections.contains(to) => {
                    issues.push(ConsistencyIssue::PathWithoutConnection {
                        start: from.clone(),
                        end: to.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    for loc in locations {
        for connection in &loc.connections {
            if !has_edge(&loc.id, connection) {
                issues.push(ConsistencyIssue::ConnectionWithoutPath {
                    from: loc.id.clone(),
                    to: connection.clone(),
                });
            }
            if let Some(other) = by_id.get(connection.as_str()) {
                if !other.connections.contains(&loc.id) {
                    issues.push(ConsistencyIssue::MissingReciprocal {
                        from: loc.id.clone(),
                        to: connection.clone(),
                    });
                }
            }
        }
    }

    issues
}
