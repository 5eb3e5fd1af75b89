//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Default file name for navigation configuration
pub const CONFIG_FILE_NAME: &str = "campusnav.toml";

/// Route-finding algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Dijkstra over edge distances
    #[default]
    ShortestPath,
    /// Fewest hops
    BreadthFirst,
    /// Depth-first search, see [`DepthFirstMode`]
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::ShortestPath,
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::ShortestPath => "shortest-path",
            Algorithm::BreadthFirst => "breadth-first",
            Algorithm::DepthFirst => "depth-first",
        }
    }
}

impl FromStr for Algorithm {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "shortest-path" | "shortest" | "dijkstra" => Ok(Algorithm::ShortestPath),
            "breadth-first" | "bfs" => Ok(Algorithm::BreadthFirst),
            "depth-first" | "dfs" => Ok(Algorithm::DepthFirst),
            _ => Err(NavError::unsupported(
                "algorithm",
                s,
                "shortest-path, breadth-first, depth-first",
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the depth-first algorithm picks its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepthFirstMode {
    /// The first path the search reaches
    FirstFound,
    /// Enumerate simple paths and keep the one passing the most landmarks
    #[default]
    MostLandmarks,
}

impl FromStr for DepthFirstMode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "first-found" => Ok(DepthFirstMode::FirstFound),
            "most-landmarks" => Ok(DepthFirstMode::MostLandmarks),
            _ => Err(NavError::unsupported(
                "depth-first mode",
                s,
                "first-found, most-landmarks",
            )),
        }
    }
}

impl fmt::Display for DepthFirstMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthFirstMode::FirstFound => write!(f, "first-found"),
            DepthFirstMode::MostLandmarks => write!(f, "most-landmarks"),
        }
    }
}

/// Navigation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Algorithm used when none is given on the command line
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Restrict routes to accessible paths
    #[serde(default)]
    pub accessible_only: bool,

    /// Depth-first answer selection
    #[serde(default)]
    pub depth_first: DepthFirstMode,

    /// Upper bound on enumerated simple paths (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,
}

/// String view of the enum-valued keys, checked before typed
/// deserialization so unknown names surface as `Unsupported`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct NamedKeys {
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub depth_first: Option<String>,
}
