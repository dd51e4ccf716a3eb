use std::collections::BTreeMap;

use crate::DisjointSet;

/// Flat component labeling: two elements are connected iff their entries
/// hold the same label. `find` is a single lookup; `union` pays for it by
/// rewriting every entry of the losing component, O(n) in the worst case.
#[derive(Debug, Default, Clone)]
pub struct QuickFind {
    labels: BTreeMap<usize, usize>,
}

impl QuickFind {
    pub fn new() -> Self {
        Self::default()
    }

    fn vivify(&mut self, x: usize) -> usize {
        *self.labels.entry(x).or_insert(x)
    }
}

impl DisjointSet for QuickFind {
    fn find(&mut self, x: usize) -> usize {
        self.vivify(x)
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        let losing = self.vivify(p);
        let winning = self.vivify(q);
        if losing == winning {
            return false;
        }
        for label in self.labels.values_mut() {
            if *label == losing {
                *label = winning;
            }
        }
        true
    }

    fn parents(&self) -> &BTreeMap<usize, usize> {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabels_p_side_to_q_label() {
        let mut qf = QuickFind::new();
        assert!(qf.union(1, 2));
        assert_eq!(qf.parents().get(&1), Some(&2));
        assert_eq!(qf.parents().get(&2), Some(&2));
    }

    #[test]
    fn labels_stay_flat_across_unions() {
        let mut qf = QuickFind::new();
        qf.union(0, 1);
        qf.union(2, 3);
        qf.union(1, 3);
        let label = qf.find(0);
        for x in 0..4 {
            assert_eq!(qf.parents()[&x], label);
        }
    }

    #[test]
    fn union_of_same_label_is_noop() {
        let mut qf = QuickFind::new();
        qf.union(0, 1);
        let before = qf.parents().clone();
        assert!(!qf.union(1, 0));
        assert_eq!(&before, qf.parents());
    }
}
