use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for campusnav
pub fn campusnav() -> Command {
    cargo_bin_cmd!("campusnav")
}

/// A(0,0) B(1,0) waypoint_0(0.5,0) C(0.5,0.5) D(0.9,0.9)
///
/// A-W 5, W-B 5, A-B 12, B-C 8 (stairs, inaccessible). D is an island.
pub const CAMPUS: &str = r#"{
  "locations": [
    {"id": "a", "name": "A", "full_name": "Alpha Hall", "x": 0.0, "y": 0.0,
     "type": "building", "connections": ["waypoint_0", "b"]},
    {"id": "b", "name": "B", "full_name": "Beta Library", "x": 1.0, "y": 0.0,
     "type": "building", "connections": ["waypoint_0", "a", "c"]},
    {"id": "waypoint_0", "name": "", "x": 0.5, "y": 0.0, "type": "waypoint",
     "is_waypoint": true, "connections": ["a", "b"]},
    {"id": "c", "name": "C", "x": 0.5, "y": 0.5, "type": "entrance",
     "connections": ["b"]},
    {"id": "d", "name": "D", "x": 0.9, "y": 0.9, "type": "building",
     "connections": []}
  ],
  "paths": [
    {"start_id": "a", "end_id": "waypoint_0", "distance": 5.0, "path_type": "walkway", "is_accessible": true},
    {"start_id": "waypoint_0", "end_id": "b", "distance": 5.0, "path_type": "walkway", "is_accessible": true},
    {"start_id": "a", "end_id": "b", "distance": 12.0, "path_type": "walkway", "is_accessible": true},
    {"start_id": "b", "end_id": "c", "distance": 8.0, "path_type": "stairs", "is_accessible": false}
  ]
}
"#;

/// Temp dir holding `campus.json`; run commands with it as the working dir
pub fn setup_campus() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("campus.json"), CAMPUS).unwrap();
    dir
}

/// Command rooted in `dir`
pub fn campusnav_in(dir: &TempDir) -> Command {
    let mut cmd = campusnav();
    cmd.current_dir(dir.path()).env_remove("CAMPUSNAV_MAP");
    cmd
}

#[allow(dead_code)]
pub fn map_path(dir: &TempDir) -> PathBuf {
    dir.path().join("campus.json")
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
