//! Graph visualization export.
//!
//! Emits the graph (and optionally a route to highlight) as Graphviz DOT
//! text; layout and rendering are the consumer's concern.

mod to_dot;

pub use to_dot::graph_to_dot;
