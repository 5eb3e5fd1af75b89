use serde::{Deserialize, Serialize};

use super::default_true;

/// Identifier prefix given to generated waypoints
pub const WAYPOINT_PREFIX: &str = "waypoint_";

/// Category of a location on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    #[default]
    Building,
    /// Unnamed routing-only node
    Waypoint,
    Entrance,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Building => "building",
            LocationKind::Waypoint => "waypoint",
            LocationKind::Entrance => "entrance",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LocationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "building" => Ok(LocationKind::Building),
            "waypoint" => Ok(LocationKind::Waypoint),
            "entrance" => Ok(LocationKind::Entrance),
            other => Err(format!(
                "unknown location type '{}' (expected: building, waypoint, entrance)",
                other
            )),
        }
    }
}

/// A node on the campus map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    /// Display name; empty for waypoints
    #[serde(default)]
    pub name: String,
    /// Full name; empty when not set
    #[serde(default)]
    pub full_name: String,
    /// Normalized horizontal coordinate in `[0, 1]`
    pub x: f64,
    /// Normalized vertical coordinate in `[0, 1]`
    pub y: f64,
    #[serde(rename = "type", default)]
    pub kind: LocationKind,
    #[serde(default = "default_true")]
    pub is_accessible: bool,
    #[serde(default)]
    pub is_waypoint: bool,
    /// Neighbor ids, derived from the edge set
    #[serde(default)]
    pub connections: Vec<String>,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Location {
            id: id.into(),
            name: name.into(),
            full_name: String::new(),
            x,
            y,
            kind: LocationKind::Building,
            is_accessible: true,
            is_waypoint: false,
            connections: Vec::new(),
        }
    }

    /// Unnamed routing-only location
    pub fn waypoint(id: impl Into<String>, x: f64, y: f64) -> Self {
        Location {
            kind: LocationKind::Waypoint,
            is_waypoint: true,
            ..Location::new(id, "", x, y)
        }
    }

    pub fn with_kind(mut self, kind: LocationKind) -> Self {
        self.kind = kind;
        self.is_waypoint = kind == LocationKind::Waypoint;
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.is_accessible = accessible;
        self
    }

    /// Whether this location counts towards a route's landmark score.
    ///
    /// Waypoints never do, whether flagged by kind, by the waypoint flag, or
    /// only by their generated identifier.
    pub fn is_landmark(&self) -> bool {
        !(self.is_waypoint
            || self.kind == LocationKind::Waypoint
            || self.id.starts_with(WAYPOINT_PREFIX))
    }

    /// Best human-readable label: full name, then name, then id.
    pub fn label(&self) -> &str {
        if !self.full_name.is_empty() {
            &self.full_name
        } else if !self.name.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
