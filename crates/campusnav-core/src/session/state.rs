//! Session states and events

use std::fmt;

use serde::Serialize;

use crate::config::Algorithm;
use crate::traversal::Route;

/// Where a navigation session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionState {
    /// No selection
    Idle,
    /// Start chosen, waiting for a destination
    StartSelected,
    /// Both endpoints chosen and a route is held
    PathComputed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::StartSelected => write!(f, "start-selected"),
            SessionState::PathComputed => write!(f, "path-computed"),
        }
    }
}

/// Why a selection was not applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "id", rename_all = "kebab-case")]
pub enum IgnoreReason {
    UnknownLocation(String),
    Waypoint(String),
    /// A route is already shown; reset first
    RouteShown,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::UnknownLocation(id) => write!(f, "unknown location: {}", id),
            IgnoreReason::Waypoint(id) => write!(f, "{} is a waypoint and cannot be selected", id),
            IgnoreReason::RouteShown => write!(f, "a route is already shown; reset to start over"),
        }
    }
}

/// Outcome of a session call, for the caller's messaging
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum SessionEvent {
    StartSelected { start: String },
    RouteFound { route: Route },
    /// The attempt failed and the selection was cleared
    NoRoute { start: String, end: String },
    Ignored { reason: IgnoreReason },
    Cleared,
    ConfigUpdated {
        algorithm: Algorithm,
        accessible_only: bool,
    },
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEvent::StartSelected { start } => write!(f, "start: {}", start),
            SessionEvent::RouteFound { route } => write!(
                f,
                "route: {} ({:.1})",
                route.nodes.join(" -> "),
                route.distance
            ),
            SessionEvent::NoRoute { start, end } => {
                write!(f, "no route from {} to {}; selection cleared", start, end)
            }
            SessionEvent::Ignored { reason } => write!(f, "ignored: {}", reason),
            SessionEvent::Cleared => write!(f, "cleared"),
            SessionEvent::ConfigUpdated {
                algorithm,
                accessible_only,
            } => write!(
                f,
                "algorithm: {}, accessible only: {}",
                algorithm, accessible_only
            ),
        }
    }
}
