//! Campus data model
//!
//! Locations and the undirected walkways between them. `CampusData` is the
//! only way to mutate the model, and every mutation keeps each location's
//! `connections` list in step with the edge set.

pub mod campus;
pub mod document;
pub mod edge;
pub mod geometry;
pub mod location;

pub use campus::{CampusData, ConsistencyIssue, DEFAULT_PICK_RADIUS};
pub use document::MapDocument;
pub use edge::{Edge, DEFAULT_PATH_TYPE};
pub use geometry::{point_segment_distance, scaled_distance, DISTANCE_SCALE};
pub use location::{Location, LocationKind, WAYPOINT_PREFIX};

pub(crate) fn default_true() -> bool {
    true
}
