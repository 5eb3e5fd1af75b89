//! Campusnav Core Library
//!
//! Campus map data model, graph index, route finding and navigation session.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod model;
pub mod session;
pub mod traversal;
