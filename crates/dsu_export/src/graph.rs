use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ExportError;

/// Flat node/link document consumed by the visualization frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: usize,
    pub group: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
}

/// Dumps a single forest: one node per element with `group = name /
/// group_size`, one link from each element to its current parent entry.
/// Roots keep their self-link.
pub fn forest_graph(
    parents: &BTreeMap<usize, usize>,
    group_size: usize,
) -> Result<Graph, ExportError> {
    if group_size == 0 {
        return Err(ExportError::InvalidGroupSize);
    }
    let mut nodes = Vec::with_capacity(parents.len());
    let mut links = Vec::with_capacity(parents.len());
    for (&element, &parent) in parents {
        nodes.push(GraphNode {
            name: element,
            group: element / group_size,
        });
        links.push(GraphLink {
            source: element,
            target: parent,
        });
    }
    Ok(Graph { nodes, links })
}
