//! Shortest-path queries over the route graph

mod shortest_path;

pub use shortest_path::{RoutePath, shortest_path};
