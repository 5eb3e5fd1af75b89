use super::*;
use crate::model::{Edge, Location};

fn sample() -> CampusData {
    let mut data = CampusData::new();
    data.add_location(Location::new("a", "A", 0.0, 0.0)).unwrap();
    data.add_location(Location::new("b", "B", 1.0, 0.0)).unwrap();
    data.add_location(Location::waypoint("waypoint_0", 0.5, 0.0)).unwrap();
    data.add_location(Location::new("c", "C", 0.5, 0.5)).unwrap();
    data.add_path(Edge::new("a", "waypoint_0", 5.0)).unwrap();
    data.add_path(Edge::new("waypoint_0", "b", 5.0)).unwrap();
    data.add_path(Edge::new("a", "b", 12.0).with_accessible(false)).unwrap();
    data.add_path(Edge::new("c", "a", 7.0)).unwrap();
    data
}

#[test]
fn test_build_counts() {
    let graph = CampusGraph::build(&sample());
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(false), 4);
    assert_eq!(graph.edge_count(true), 3);
}

#[test]
fn test_neighbors_follow_path_insertion_order() {
    let graph = CampusGraph::build(&sample());
    assert_eq!(
        graph.neighbors("a", false),
        vec![
            ("waypoint_0".to_string(), 5.0),
            ("b".to_string(), 12.0),
            ("c".to_string(), 7.0),
        ]
    );
}

#[test]
fn test_neighbors_unknown_id_is_empty() {
    let graph = CampusGraph::build(&sample());
    assert!(graph.neighbors("zz", false).is_empty());
    assert!(!graph.contains("zz"));
}

#[test]
fn test_accessible_view_is_subset() {
    let graph = CampusGraph::build(&sample());
    for handle in graph.handles() {
        let id = graph.id(handle).to_string();
        let all = graph.neighbors(&id, false);
        for neighbor in graph.neighbors(&id, true) {
            assert!(all.contains(&neighbor), "{:?} missing from {}", neighbor, id);
        }
    }
    assert_eq!(graph.neighbors("a", true).len(), 2);
}

#[test]
fn test_rebuild_is_idempotent() {
    let data = sample();
    let first = CampusGraph::build(&data);
    let second = CampusGraph::build(&data);
    assert_eq!(first, second);
    for handle in first.handles() {
        let id = first.id(handle);
        assert_eq!(first.neighbors(id, true), second.neighbors(id, true));
        assert_eq!(first.neighbors(id, false), second.neighbors(id, false));
    }
}

#[test]
fn test_landmarks() {
    let graph = CampusGraph::build(&sample());
    let a = graph.handle("a").unwrap();
    let w = graph.handle("waypoint_0").unwrap();
    assert!(graph.is_landmark(a));
    assert!(!graph.is_landmark(w));
}

#[test]
fn test_weight_between_respects_view() {
    let graph = CampusGraph::build(&sample());
    let a = graph.handle("a").unwrap();
    let b = graph.handle("b").unwrap();
    assert_eq!(graph.weight_between(a, b, false), Some(12.0));
    assert_eq!(graph.weight_between(a, b, true), None);
}

#[test]
fn test_removed_location_disappears_from_rebuild() {
    let mut data = sample();
    let graph = CampusGraph::build(&data);
    assert!(!graph.is_stale(&data));

    data.remove_location("waypoint_0").unwrap();
    assert!(graph.is_stale(&data));

    let rebuilt = CampusGraph::build(&data);
    assert!(!rebuilt.contains("waypoint_0"));
    assert_eq!(rebuilt.edge_count(false), 2);
    assert!(rebuilt
        .neighbors("b", false)
        .iter()
        .all(|(id, _)| id != "waypoint_0"));
    assert_eq!(rebuilt.neighbors("b", false), vec![("a".to_string(), 12.0)]);
}

#[test]
fn test_empty_accessible_view() {
    let mut data = CampusData::new();
    data.add_location(Location::new("a", "A", 0.0, 0.0)).unwrap();
    data.add_location(Location::new("b", "B", 1.0, 0.0)).unwrap();
    data.add_path(Edge::new("a", "b", 3.0).with_accessible(false)).unwrap();

    let graph = CampusGraph::build(&data);
    assert_eq!(graph.edge_count(true), 0);
    assert!(graph.neighbors("a", true).is_empty());
}
