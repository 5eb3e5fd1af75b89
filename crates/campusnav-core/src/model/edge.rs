use serde::{Deserialize, Serialize};

use super::default_true;

/// Path type assigned when none is given
pub const DEFAULT_PATH_TYPE: &str = "walkway";

fn default_path_type() -> String {
    DEFAULT_PATH_TYPE.to_string()
}

/// An undirected weighted connection between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub start_id: String,
    pub end_id: String,
    /// Length in map distance units, non-negative
    pub distance: f64,
    #[serde(default = "default_path_type")]
    pub path_type: String,
    #[serde(default = "default_true")]
    pub is_accessible: bool,
}

impl Edge {
    pub fn new(start_id: impl Into<String>, end_id: impl Into<String>, distance: f64) -> Self {
        Edge {
            start_id: start_id.into(),
            end_id: end_id.into(),
            distance,
            path_type: default_path_type(),
            is_accessible: true,
        }
    }

    pub fn with_path_type(mut self, path_type: impl Into<String>) -> Self {
        self.path_type = path_type.into();
        self
    }

    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.is_accessible = accessible;
        self
    }

    /// True when this edge joins `a` and `b`, in either orientation.
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.start_id == a && self.end_id == b) || (self.start_id == b && self.end_id == a)
    }

    pub fn touches(&self, id: &str) -> bool {
        self.start_id == id || self.end_id == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other_end(&self, id: &str) -> Option<&str> {
        if self.start_id == id {
            Some(&self.end_id)
        } else if self.end_id == id {
            Some(&self.start_id)
        } else {
            None
        }
    }
}
