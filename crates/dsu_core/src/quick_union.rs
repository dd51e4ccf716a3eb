use std::collections::BTreeMap;

use crate::DisjointSet;

/// Unbalanced parent forest. `union` always hangs p's root under q's root,
/// so an adversarial order of unions degrades the forest into an
/// O(n)-height chain. That asymmetry is the point of this variant; the
/// weighted variants exist to fix it.
#[derive(Debug, Default, Clone)]
pub struct QuickUnion {
    parent: BTreeMap<usize, usize>,
}

impl QuickUnion {
    pub fn new() -> Self {
        Self::default()
    }

    fn vivify(&mut self, x: usize) {
        self.parent.entry(x).or_insert(x);
    }
}

impl DisjointSet for QuickUnion {
    fn find(&mut self, x: usize) -> usize {
        self.vivify(x);
        let mut x = x;
        while self.parent[&x] != x {
            x = self.parent[&x];
        }
        x
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return false;
        }
        self.parent.insert(root_p, root_q);
        true
    }

    fn parents(&self) -> &BTreeMap<usize, usize> {
        &self.parent
    }
}
