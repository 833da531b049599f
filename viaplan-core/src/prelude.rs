// Re-export key components
pub use crate::loading::{PlannerConfig, ProviderConfig, Region, build_route_graph};
pub use crate::model::{Metric, Place, RouteGraph, RouteLeg};
pub use crate::oracle::{CachedOracle, DistanceMatrixClient, DistanceOracle};
pub use crate::routing::{RoutePath, shortest_path};
pub use crate::viz::graph_to_dot;

// Core units
pub use crate::Hours;
pub use crate::Kilometers;
