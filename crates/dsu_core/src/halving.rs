use std::collections::BTreeMap;

use crate::DisjointSet;

/// [`WeightedQuickUnion`] plus path halving: while walking to the root,
/// `find` points every visited node at its grandparent before stepping,
/// so each traversal flattens the path it took. Unions resolve both roots
/// through the halving `find`, compressing as a side effect.
///
/// [`WeightedQuickUnion`]: crate::WeightedQuickUnion
#[derive(Debug, Default, Clone)]
pub struct PathHalvingQuickUnion {
    parent: BTreeMap<usize, usize>,
    size: BTreeMap<usize, usize>,
}

impl PathHalvingQuickUnion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in `x`'s component.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[&root]
    }

    fn vivify(&mut self, x: usize) {
        self.parent.entry(x).or_insert(x);
        self.size.entry(x).or_insert(1);
    }
}

impl DisjointSet for PathHalvingQuickUnion {
    fn find(&mut self, x: usize) -> usize {
        self.vivify(x);
        let mut x = x;
        while self.parent[&x] != x {
            let grandparent = self.parent[&self.parent[&x]];
            self.parent.insert(x, grandparent);
            x = grandparent;
        }
        x
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return false;
        }
        let merged = self.size[&root_p] + self.size[&root_q];
        if self.size[&root_p] < self.size[&root_q] {
            self.parent.insert(root_p, root_q);
            self.size.insert(root_q, merged);
        } else {
            self.parent.insert(root_q, root_p);
            self.size.insert(root_p, merged);
        }
        true
    }

    fn parents(&self) -> &BTreeMap<usize, usize> {
        &self.parent
    }
}
