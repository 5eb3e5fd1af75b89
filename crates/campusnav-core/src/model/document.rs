//! Persisted map document
//!
//! The on-disk shape is a JSON object with two ordered collections,
//! `locations` and `paths`, whose records are `Location` and `Edge`
//! serialized directly.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::campus::{symmetry_issues, CampusData, ConsistencyIssue};
use super::edge::Edge;
use super::location::Location;
use crate::error::{NavError, Result};

/// Serialized form of a campus map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub paths: Vec<Edge>,
}

impl MapDocument {
    /// Load a map document from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NavError::MapNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)
            .map_err(|e| NavError::io_operation("read map", path.display(), e))?;
        let document: MapDocument = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            locations = document.locations.len(),
            paths = document.paths.len(),
            "load_map"
        );
        Ok(document)
    }

    /// Save the map document as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content + "\n")
            .map_err(|e| NavError::io_operation("write map", path.display(), e))?;
        debug!(path = %path.display(), "save_map");
        Ok(())
    }

    /// Symmetry violations in the stored connection lists, before loading
    /// re-derives them from paths.
    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        symmetry_issues(&self.locations, &self.paths)
    }
}

impl CampusData {
    /// Build campus data from a document through the validating mutation
    /// API. Stored connection lists are re-derived from paths; a location
    /// whose stored list disagrees is logged and corrected.
    pub fn from_document(document: MapDocument) -> Result<Self> {
        let mut data = CampusData::new();

        let mut stored = Vec::with_capacity(document.locations.len());
        for location in document.locations {
            stored.push((location.id.clone(), location.connections.clone()));
            data.add_location(location)?;
        }
        for path in document.paths {
            data.add_path(path)?;
        }

        for (id, connections) in stored {
            let Some(derived) = data.location(&id) else {
                continue;
            };
            let stored_set: BTreeSet<&String> = connections.iter().collect();
            let derived_set: BTreeSet<&String> = derived.connections.iter().collect();
            if stored_set != derived_set {
                warn!(
                    id = %id,
                    stored = ?stored_set,
                    derived = ?derived_set,
                    "stored connections disagree with paths; using paths"
                );
            }
        }

        Ok(data)
    }

    /// Snapshot the model into its persisted shape
    pub fn to_document(&self) -> MapDocument {
        MapDocument {
            locations: self.locations().to_vec(),
            paths: self.paths().to_vec(),
        }
    }

    /// Load campus data straight from a map file
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_document(MapDocument::load(path)?)
    }

    /// Save campus data to a map file
    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_document().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "locations": [
            {"id": "pl", "name": "PL", "full_name": "Pollak Library", "x": 0.2, "y": 0.3,
             "type": "building", "is_accessible": true, "is_waypoint": false,
             "connections": ["waypoint_0"]},
            {"id": "waypoint_0", "name": "", "x": 0.25, "y": 0.3, "type": "waypoint",
             "is_waypoint": true, "connections": ["pl", "ec"]},
            {"id": "ec", "name": "EC", "x": 0.3, "y": 0.3, "type": "entrance",
             "connections": ["waypoint_0"]}
        ],
        "paths": [
            {"start_id": "pl", "end_id": "waypoint_0", "distance": 37.5,
             "path_type": "walkway", "is_accessible": true},
            {"start_id": "waypoint_0", "end_id": "ec", "distance": 37.5,
             "path_type": "stairs", "is_accessible": false}
        ]
    }"#;

    #[test]
    fn test_from_document_keeps_supplied_distances() {
        let document: MapDocument = serde_json::from_str(SAMPLE).unwrap();
        let data = CampusData::from_document(document).unwrap();

        assert_eq!(data.location_count(), 3);
        assert_eq!(data.path_count(), 2);
        let stairs = data.edge_between("ec", "waypoint_0").unwrap();
        assert_eq!(stairs.distance, 37.5);
        assert_eq!(stairs.path_type, "stairs");
        assert!(!stairs.is_accessible);
        assert!(data.consistency_issues().is_empty());
    }

    #[test]
    fn test_from_document_rederives_connections() {
        let mut document: MapDocument = serde_json::from_str(SAMPLE).unwrap();
        document.locations[0].connections = vec!["ec".to_string()];

        let data = CampusData::from_document(document).unwrap();
        assert_eq!(data.location("pl").unwrap().connections, vec!["waypoint_0"]);
        assert!(data.consistency_issues().is_empty());
    }

    #[test]
    fn test_document_reports_stale_connections() {
        let mut document: MapDocument = serde_json::from_str(SAMPLE).unwrap();
        assert!(document.consistency_issues().is_empty());

        document.locations[2].connections.clear();
        let issues = document.consistency_issues();
        assert!(issues.contains(&ConsistencyIssue::PathWithoutConnection {
            start: "ec".to_string(),
            end: "waypoint_0".to_string(),
        }));
        assert!(issues.contains(&ConsistencyIssue::MissingReciprocal {
            from: "waypoint_0".to_string(),
            to: "ec".to_string(),
        }));
    }

    #[test]
    fn test_from_document_rejects_duplicate_path() {
        let mut document: MapDocument = serde_json::from_str(SAMPLE).unwrap();
        document.paths.push(Edge::new("ec", "waypoint_0", 1.0));

        let err = CampusData::from_document(document).unwrap_err();
        assert!(matches!(err, NavError::DuplicatePath { .. }));
    }

    #[test]
    fn test_from_document_rejects_dangling_path() {
        let mut document: MapDocument = serde_json::from_str(SAMPLE).unwrap();
        document.paths.push(Edge::new("pl", "gym", 1.0));

        let err = CampusData::from_document(document).unwrap_err();
        assert!(matches!(err, NavError::UnknownLocation { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("campus.json");

        let document: MapDocument = serde_json::from_str(SAMPLE).unwrap();
        let data = CampusData::from_document(document).unwrap();
        data.save(&path).unwrap();

        let loaded = CampusData::load(&path).unwrap();
        assert_eq!(loaded.to_document(), data.to_document());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = MapDocument::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, NavError::MapNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(MapDocument::load(&path), Err(NavError::Json(_))));
    }
}
