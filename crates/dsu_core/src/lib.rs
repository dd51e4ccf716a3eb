//! Disjoint-set (union-find) connectivity with four interchangeable
//! strategies: quick-find, quick-union, weighted quick-union, and weighted
//! quick-union with path halving.

use std::collections::BTreeMap;

mod halving;
mod quick_find;
mod quick_union;
mod weighted;

pub use halving::PathHalvingQuickUnion;
pub use quick_find::QuickFind;
pub use quick_union::QuickUnion;
pub use weighted::WeightedQuickUnion;

/// Common contract of all variants.
///
/// Elements are vivified on first reference: `find` or `union` on an unseen
/// element silently inserts it as a singleton root instead of failing.
pub trait DisjointSet {
    /// Returns the representative of `x`'s component.
    fn find(&mut self, x: usize) -> usize;

    /// Merges the components of `p` and `q`. Returns `false` when they were
    /// already connected (including `p == q`) and nothing was merged.
    fn union(&mut self, p: usize, q: usize) -> bool;

    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// The raw element-to-parent mapping. For [`QuickFind`] the "parent" is
    /// the flat component label rather than a tree edge.
    fn parents(&self) -> &BTreeMap<usize, usize>;

    /// Number of distinct elements seen so far.
    fn len(&self) -> usize {
        self.parents().len()
    }

    fn is_empty(&self) -> bool {
        self.parents().is_empty()
    }
}
