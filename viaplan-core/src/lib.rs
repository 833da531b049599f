//! Core logic of the viaplan route planner.
//!
//! Builds a directed graph over a fixed set of named places, with each edge
//! weighted by the driving distance and duration reported by an external
//! distance-matrix provider, and answers shortest-path queries over it.

pub mod error;
pub mod loading;
pub mod model;
pub mod oracle;
pub mod prelude;
pub mod routing;
pub mod viz;

pub use error::Error;

/// Driving distance in kilometers
pub type Kilometers = f64;
/// Driving time in hours
pub type Hours = f64;
