use hashbrown::HashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::model::Place;
use crate::{Hours, Kilometers};

/// Driving leg between two places as reported by the distance provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Driving distance in kilometers
    pub distance: Kilometers,
    /// Driving time in hours
    pub duration: Hours,
}

/// Edge attribute a shortest-path query minimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Distance,
    Duration,
}

impl Metric {
    /// Weight of a leg under this metric
    pub fn weight(self, leg: &RouteLeg) -> f64 {
        match self {
            Metric::Distance => leg.distance,
            Metric::Duration => leg.duration,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Distance => "km",
            Metric::Duration => "h",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Metric::Distance),
            "duration" => Ok(Metric::Duration),
            other => Err(crate::Error::InvalidData(format!(
                "unknown metric '{other}', expected 'distance' or 'duration'"
            ))),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Distance => f.write_str("distance"),
            Metric::Duration => f.write_str("duration"),
        }
    }
}

/// Directed graph over the configured place set.
///
/// Nodes are exactly the configured places; an edge exists only for ordered
/// pairs the distance provider resolved successfully. Built once per
/// session, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    pub graph: DiGraph<Place, RouteLeg>,
    node_index: HashMap<String, NodeIndex>,
}

impl RouteGraph {
    /// Creates a graph containing every place as a node and no edges yet
    pub fn with_places(places: &[Place]) -> Self {
        let mut graph = DiGraph::with_capacity(places.len(), places.len() * places.len());
        let mut node_index = HashMap::with_capacity(places.len());
        for place in places {
            let idx = graph.add_node(place.clone());
            node_index.insert(place.name.clone(), idx);
        }
        Self { graph, node_index }
    }

    /// Node index of a place by display name
    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    pub fn place(&self, node: NodeIndex) -> Option<&Place> {
        self.graph.node_weight(node)
    }

    pub fn add_leg(&mut self, origin: NodeIndex, destination: NodeIndex, leg: RouteLeg) {
        self.graph.add_edge(origin, destination, leg);
    }

    /// Leg for an ordered pair of place names, if the provider resolved it
    pub fn leg(&self, origin: &str, destination: &str) -> Option<&RouteLeg> {
        let from = self.node(origin)?;
        let to = self.node(destination)?;
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge)
    }

    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.graph.node_weights()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
