use dsu_core::{
    DisjointSet, PathHalvingQuickUnion, QuickFind, QuickUnion, WeightedQuickUnion,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{ExportError, Graph, GraphLink, GraphNode};

/// Demo parameters. The seed pins the generated pair sequence so runs are
/// reproducible.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub seed: u64,
    pub points: usize,
    pub pairs: usize,
    pub group_size: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            points: 20,
            pairs: 30,
            group_size: 3,
        }
    }
}

/// Draws `pairs` random edges over the `0..points` universe.
pub fn random_pairs(rng: &mut StdRng, points: usize, pairs: usize) -> Vec<(usize, usize)> {
    if points == 0 {
        return Vec::new();
    }
    (0..pairs)
        .map(|_| (rng.gen_range(0..points), rng.gen_range(0..points)))
        .collect()
}

/// Runs one pair sequence through all four variants and composes the
/// resulting forests into a single document. Variant `n`'s element `k` is
/// stored as `n * points + k`, on node names and link endpoints alike, so
/// each forest occupies its own name range in the combined visualization.
pub fn combined_graph(
    pairs: &[(usize, usize)],
    points: usize,
    group_size: usize,
) -> Result<Graph, ExportError> {
    if group_size == 0 {
        return Err(ExportError::InvalidGroupSize);
    }
    let mut variants: [Box<dyn DisjointSet>; 4] = [
        Box::new(QuickFind::new()),
        Box::new(QuickUnion::new()),
        Box::new(WeightedQuickUnion::new()),
        Box::new(PathHalvingQuickUnion::new()),
    ];
    let mut nodes = Vec::new();
    let mut links = Vec::new();
    for (n, dsu) in variants.iter_mut().enumerate() {
        for &(p, q) in pairs {
            dsu.union(p, q);
        }
        let offset = n * points;
        for (&element, &parent) in dsu.parents() {
            let name = offset + element;
            nodes.push(GraphNode {
                name,
                group: name / group_size,
            });
            links.push(GraphLink {
                source: name,
                target: offset + parent,
            });
        }
    }
    Ok(Graph { nodes, links })
}

/// Seeds the generator from `config` and exports the combined forest.
pub fn run_demo(config: &DemoConfig) -> Result<Graph, ExportError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let pairs = random_pairs(&mut rng, config.points, config.pairs);
    combined_graph(&pairs, config.points, config.group_size)
}
