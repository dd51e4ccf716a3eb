//! Node/link graph export for disjoint-set forests, plus the demo driver
//! that runs one random pair sequence through all four variants and dumps
//! the combined forest as JSON for visualization.

mod demo;
mod error;
mod graph;
mod writer;

pub use demo::{DemoConfig, combined_graph, random_pairs, run_demo};
pub use error::ExportError;
pub use graph::{Graph, GraphLink, GraphNode, forest_graph};
pub use writer::write_graph;
