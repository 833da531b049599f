use std::fmt::Write as _;

use hashbrown::{HashMap, HashSet};
use petgraph::visit::EdgeRef;

use crate::model::RouteGraph;
use crate::routing::RoutePath;

const REGION_COLORS: [&str; 6] = [
    "lightblue",
    "lightgoldenrod1",
    "palegreen",
    "lightsalmon",
    "plum",
    "lightgray",
];

/// Renders the graph as Graphviz DOT.
///
/// Nodes are colored by region, edges labeled with their distance in
/// kilometers. Edges belonging to `highlight` are drawn red and thick, the
/// rest gray.
pub fn graph_to_dot(graph: &RouteGraph, highlight: Option<&RoutePath>) -> String {
    let highlighted: HashSet<(&str, &str)> = highlight
        .map(|path| {
            path.places
                .windows(2)
                .map(|pair| (pair[0].as_str(), pair[1].as_str()))
                .collect()
        })
        .unwrap_or_default();

    let mut region_colors: HashMap<&str, &str> = HashMap::new();
    let mut out = String::from("digraph places {\n");
    let _ = writeln!(out, "    rankdir=LR;");
    let _ = writeln!(out, "    node [shape=ellipse, style=filled];");

    for place in graph.places() {
        let assigned = region_colors.len();
        let color = *region_colors
            .entry(place.region.as_str())
            .or_insert(REGION_COLORS[assigned % REGION_COLORS.len()]);
        let _ = writeln!(
            out,
            "    \"{}\" [fillcolor=\"{}\"];",
            escape(&place.name),
            color
        );
    }

    for edge in graph.graph.edge_references() {
        let (Some(origin), Some(destination)) =
            (graph.place(edge.source()), graph.place(edge.target()))
        else {
            continue;
        };
        let on_route = highlighted.contains(&(origin.name.as_str(), destination.name.as_str()));
        let style = if on_route {
            "color=\"red\", penwidth=3.0"
        } else {
            "color=\"gray60\""
        };
        let _ = writeln!(
            out,
            "    \"{}\" -> \"{}\" [label=\"{:.1}\", {}];",
            escape(&origin.name),
            escape(&destination.name),
            edge.weight().distance,
            style
        );
    }

    out.push_str("}\n");
    out
}

fn escape(name: &str) -> String {
    name.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metric, Place, RouteLeg};

    fn sample_graph() -> RouteGraph {
        let places = vec![
            Place::new("A", "north"),
            Place::new("B", "north"),
            Place::new("C", "south"),
        ];
        let mut graph = RouteGraph::with_places(&places);
        let a = graph.node("A").unwrap();
        let b = graph.node("B").unwrap();
        let c = graph.node("C").unwrap();
        graph.add_leg(
            a,
            b,
            RouteLeg {
                distance: 5.0,
                duration: 0.1,
            },
        );
        graph.add_leg(
            b,
            c,
            RouteLeg {
                distance: 4.0,
                duration: 0.1,
            },
        );
        graph
    }

    #[test]
    fn every_node_and_edge_is_emitted() {
        let dot = graph_to_dot(&sample_graph(), None);

        assert!(dot.starts_with("digraph places {"));
        for name in ["\"A\"", "\"B\"", "\"C\""] {
            assert!(dot.contains(name), "missing node {name}");
        }
        assert_eq!(dot.matches("->").count(), 2);
        assert!(!dot.contains("red"));
    }

    #[test]
    fn highlighted_route_edges_are_red() {
        let path = RoutePath {
            places: vec!["A".to_string(), "B".to_string()],
            total: 5.0,
            metric: Metric::Distance,
        };
        let dot = graph_to_dot(&sample_graph(), Some(&path));

        let highlighted: Vec<&str> = dot.lines().filter(|l| l.contains("red")).collect();
        assert_eq!(highlighted.len(), 1);
        assert!(highlighted[0].contains("\"A\" -> \"B\""));
    }

    #[test]
    fn regions_share_a_fill_color() {
        let dot = graph_to_dot(&sample_graph(), None);

        let fill_of = |node: &str| {
            let line = dot
                .lines()
                .find(|l| l.contains(&format!("\"{node}\" [fillcolor=\"")))
                .unwrap();
            let start = line.find("fillcolor=\"").unwrap() + "fillcolor=\"".len();
            line[start..].split('"').next().unwrap().to_string()
        };

        assert_eq!(fill_of("A"), fill_of("B"));
        assert_ne!(fill_of("A"), fill_of("C"));
    }
}
