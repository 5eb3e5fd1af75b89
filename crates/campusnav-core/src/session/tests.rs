use super::*;
use crate::config::DepthFirstMode;
use crate::model::{Edge, Location};

/// A(0,0) B(1,0) W(0.5,0): A-W 5, W-B 5, A-B 12 (stairs), plus an island C
fn campus() -> CampusData {
    let mut data = CampusData::new();
    data.add_location(Location::new("a", "A", 0.0, 0.0)).unwrap();
    data.add_location(Location::new("b", "B", 1.0, 0.0)).unwrap();
    data.add_location(Location::waypoint("waypoint_0", 0.5, 0.0)).unwrap();
    data.add_location(Location::new("c", "C", 0.5, 0.5)).unwrap();
    data.add_path(Edge::new("a", "waypoint_0", 5.0).with_accessible(false))
        .unwrap();
    data.add_path(Edge::new("waypoint_0", "b", 5.0)).unwrap();
    data.add_path(Edge::new("a", "b", 12.0)).unwrap();
    data
}

#[test]
fn test_select_start_then_end() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::default();
    assert_eq!(session.state(), SessionState::Idle);

    let event = session.select(&graph, "a");
    assert_eq!(event, SessionEvent::StartSelected { start: "a".into() });
    assert_eq!(session.state(), SessionState::StartSelected);

    let event = session.select(&graph, "b");
    let SessionEvent::RouteFound { route } = event else {
        panic!("expected a route, got {:?}", event);
    };
    assert_eq!(route.nodes, vec!["a", "waypoint_0", "b"]);
    assert_eq!(route.distance, 10.0);
    assert_eq!(session.state(), SessionState::PathComputed);
    assert_eq!(session.start(), Some("a"));
    assert_eq!(session.end(), Some("b"));
    assert_eq!(session.result(), Some(&route));
}

#[test]
fn test_no_route_clears_selection() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::default();
    session.select(&graph, "a");
    let event = session.select(&graph, "c");

    assert_eq!(
        event,
        SessionEvent::NoRoute {
            start: "a".into(),
            end: "c".into()
        }
    );
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.start().is_none());
    assert!(session.end().is_none());
    assert!(session.result().is_none());
}

#[test]
fn test_select_ignored_while_route_shown() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::default();
    session.select(&graph, "a");
    session.select(&graph, "b");

    let event = session.select(&graph, "c");
    assert_eq!(
        event,
        SessionEvent::Ignored {
            reason: IgnoreReason::RouteShown
        }
    );
    assert_eq!(session.state(), SessionState::PathComputed);
    assert_eq!(session.end(), Some("b"));
}

#[test]
fn test_unknown_and_waypoint_selections_ignored() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::default();

    let event = session.select(&graph, "zz");
    assert!(matches!(
        event,
        SessionEvent::Ignored {
            reason: IgnoreReason::UnknownLocation(_)
        }
    ));
    let event = session.select(&graph, "waypoint_0");
    assert!(matches!(
        event,
        SessionEvent::Ignored {
            reason: IgnoreReason::Waypoint(_)
        }
    ));
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_reset_from_any_state() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::default();
    assert_eq!(session.reset(), SessionEvent::Cleared);

    session.select(&graph, "a");
    session.reset();
    assert_eq!(session.state(), SessionState::Idle);

    session.select(&graph, "a");
    session.select(&graph, "b");
    session.reset();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.result().is_none());
}

#[test]
fn test_set_algorithm_before_route_only_updates_config() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::default();
    session.select(&graph, "a");

    let event = session.set_algorithm(&graph, Algorithm::BreadthFirst);
    assert_eq!(
        event,
        SessionEvent::ConfigUpdated {
            algorithm: Algorithm::BreadthFirst,
            accessible_only: false
        }
    );
    assert_eq!(session.state(), SessionState::StartSelected);

    let SessionEvent::RouteFound { route } = session.select(&graph, "b") else {
        panic!("expected a route");
    };
    assert_eq!(route.nodes, vec!["a", "b"]);
}

#[test]
fn test_set_algorithm_recomputes_standing_route() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::default();
    session.select(&graph, "a");
    session.select(&graph, "b");

    let SessionEvent::RouteFound { route } = session.set_algorithm(&graph, Algorithm::BreadthFirst)
    else {
        panic!("expected a recomputed route");
    };
    assert_eq!(route.nodes, vec!["a", "b"]);
    assert_eq!(session.result(), Some(&route));
    assert_eq!(session.algorithm(), Algorithm::BreadthFirst);
}

#[test]
fn test_toggle_accessibility_recomputes() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::default();
    session.select(&graph, "a");
    session.select(&graph, "b");

    let SessionEvent::RouteFound { route } = session.toggle_accessibility(&graph) else {
        panic!("expected a recomputed route");
    };
    assert!(session.accessible_only());
    assert_eq!(route.nodes, vec!["a", "b"]);
    assert_eq!(route.distance, 12.0);
}

#[test]
fn test_recompute_failure_clears() {
    let mut data = campus();
    data.set_path_accessibility("a", "b", false).unwrap();
    let graph = CampusGraph::build(&data);

    let mut session = NavigationSession::default();
    session.select(&graph, "a");
    session.select(&graph, "b");
    assert_eq!(session.state(), SessionState::PathComputed);

    let event = session.set_accessible_only(&graph, true);
    assert!(matches!(event, SessionEvent::NoRoute { .. }));
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.accessible_only());
}

#[test]
fn test_depth_first_modes() {
    let graph = CampusGraph::build(&campus());
    let mut session = NavigationSession::new(Algorithm::DepthFirst, false);
    session.select(&graph, "a");
    let SessionEvent::RouteFound { route } = session.select(&graph, "b") else {
        panic!("expected a route");
    };
    assert_eq!(route.nodes, vec!["a", "waypoint_0", "b"]);

    let options = SearchOptions {
        depth_first: DepthFirstMode::FirstFound,
        max_paths: None,
    };
    let SessionEvent::RouteFound { route } = session.set_options(&graph, options) else {
        panic!("expected a route");
    };
    assert_eq!(route.nodes, vec!["a", "waypoint_0", "b"]);
}

#[test]
fn test_from_config() {
    let config = NavConfig {
        algorithm: Algorithm::BreadthFirst,
        accessible_only: true,
        depth_first: DepthFirstMode::FirstFound,
        max_paths: Some(3),
    };
    let session = NavigationSession::from_config(&config);
    assert_eq!(session.algorithm(), Algorithm::BreadthFirst);
    assert!(session.accessible_only());
    assert_eq!(session.options().max_paths, Some(3));
}

#[test]
fn test_navigator_refresh_recomputes() {
    let mut data = campus();
    let mut navigator = Navigator::new(&data, &NavConfig::default());
    navigator.select("a");
    navigator.select("b");

    data.remove_location("waypoint_0").unwrap();
    let event = navigator.refresh(&data).unwrap();
    let SessionEvent::RouteFound { route } = event else {
        panic!("expected a recomputed route, got {:?}", event);
    };
    assert_eq!(route.nodes, vec!["a", "b"]);
    assert!(!navigator.graph().contains("waypoint_0"));
    assert_eq!(navigator.graph().revision(), data.revision());
}

#[test]
fn test_navigator_refresh_drops_vanished_selection() {
    let mut data = campus();
    let mut navigator = Navigator::new(&data, &NavConfig::default());
    navigator.select("c");

    data.remove_location("c").unwrap();
    assert_eq!(navigator.refresh(&data), Some(SessionEvent::Cleared));
    assert_eq!(navigator.session().state(), SessionState::Idle);
}

#[test]
fn test_navigator_refresh_without_selection() {
    let mut data = campus();
    let mut navigator = Navigator::new(&data, &NavConfig::default());
    data.connect("c", "b", true).unwrap();
    assert_eq!(navigator.refresh(&data), None);
    assert_eq!(navigator.graph().edge_count(false), 4);
}

#[test]
fn test_navigator_delegates() {
    let data = campus();
    let mut navigator = Navigator::new(&data, &NavConfig::default());
    assert!(matches!(
        navigator.toggle_accessibility(),
        SessionEvent::ConfigUpdated {
            accessible_only: true,
            ..
        }
    ));
    navigator.set_accessible_only(false);
    navigator.set_algorithm(Algorithm::ShortestPath);
    navigator.select("a");
    assert_eq!(navigator.session().state(), SessionState::StartSelected);
    assert_eq!(navigator.reset(), SessionEvent::Cleared);
}
