//! CLI commands for campusnav

pub mod check;
pub mod dispatch;
pub mod edit;
pub mod locate;
pub mod locations;
pub mod neighbors;
pub mod paths;
pub mod route;
pub mod session;
