use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use ordered_float::OrderedFloat;
use petgraph::{graph::NodeIndex, visit::EdgeRef};
use serde::Serialize;

use crate::Error;
use crate::model::{Metric, RouteGraph};

#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: OrderedFloat<f64>,
    node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A resolved route: the place sequence from start to end inclusive and the
/// accumulated weight under the queried metric.
///
/// A total of exactly 0.0 is a valid route; "no route exists" is a distinct
/// outcome ([`Error::NoRouteFound`]), never a zero total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePath {
    pub places: Vec<String>,
    pub total: f64,
    pub metric: Metric,
}

/// Dijkstra's algorithm over the route graph, minimizing the chosen metric.
///
/// When several minimum-weight routes exist, whichever the heap visits
/// first is returned; callers must not rely on the tie-break.
///
/// # Errors
///
/// Rejects `start == end` before searching, unknown place names, and pairs
/// with no connecting directed walk.
pub fn shortest_path(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    metric: Metric,
) -> Result<RoutePath, Error> {
    if start == end {
        return Err(Error::SameEndpoints);
    }

    let source = graph
        .node(start)
        .ok_or_else(|| Error::UnknownPlace(start.to_string()))?;
    let target = graph
        .node(end)
        .ok_or_else(|| Error::UnknownPlace(end.to_string()))?;

    let mut distances: HashMap<NodeIndex, OrderedFloat<f64>> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: OrderedFloat(0.0),
        node: source,
    });
    distances.insert(source, OrderedFloat(0.0));

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        // Examine neighbors
        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + OrderedFloat(metric.weight(edge.weight()));

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    let Some(&total) = distances.get(&target) else {
        return Err(Error::NoRouteFound {
            origin: start.to_string(),
            destination: end.to_string(),
        });
    };

    // Follow predecessors backward from end to start
    let mut nodes = vec![target];
    let mut current = target;
    while current != source {
        let Some(&prev) = predecessors.get(&current) else {
            break;
        };
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();

    let places = nodes
        .iter()
        .filter_map(|&node| graph.place(node))
        .map(|place| place.name.clone())
        .collect();

    Ok(RoutePath {
        places,
        total: total.into_inner(),
        metric,
    })
}
