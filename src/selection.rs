//! Greedy best-pair selection.
//!
//! Every pass scores its candidate pairs once and then repeatedly takes the
//! best pair whose indices are still free. A max-heap keyed on
//! `(weight, lowest source, lowest target)` yields the same pair as scanning
//! sources then targets in ascending order and keeping the first strictly
//! greater weight.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Ranked {
    weight: f64,
    source: Reverse<usize>,
    target: Reverse<usize>,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

/// Candidate pairs ordered by weight.
#[derive(Debug, Default)]
pub(crate) struct CandidateQueue {
    heap: BinaryHeap<Ranked>,
}

impl CandidateQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Pairs weighing zero or less can never win and are not kept.
    pub(crate) fn push(&mut self, source: usize, target: usize, weight: f64) {
        if weight > 0.0 {
            self.heap.push(Ranked {
                weight,
                source: Reverse(source),
                target: Reverse(target),
            });
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// The best remaining pair accepted by `is_free`. Rejected pairs are
    /// discarded, so `is_free` must only ever turn from true to false.
    pub(crate) fn pop_best<F>(&mut self, mut is_free: F) -> Option<(usize, usize)>
    where
        F: FnMut(usize, usize) -> bool,
    {
        while let Some(ranked) = self.heap.pop() {
            let pair = (ranked.source.0, ranked.target.0);
            if is_free(pair.0, pair.1) {
                return Some(pair);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_the_lowest_indices() {
        let mut queue = CandidateQueue::new();
        queue.push(2, 1, 0.9);
        queue.push(1, 3, 0.9);
        queue.push(1, 2, 0.9);
        queue.push(3, 3, 0.0);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop_best(|_, _| true), Some((1, 2)));
        assert_eq!(queue.pop_best(|_, _| true), Some((1, 3)));
        assert_eq!(queue.pop_best(|_, _| true), Some((2, 1)));
        assert_eq!(queue.pop_best(|_, _| true), None);
    }

    #[test]
    fn heavier_pairs_win_and_busy_indices_are_skipped() {
        let mut queue = CandidateQueue::new();
        queue.push(1, 1, 0.91);
        queue.push(1, 2, 0.99);
        queue.push(2, 2, 0.95);
        assert_eq!(queue.pop_best(|s, _| s != 1), Some((2, 2)));
        assert_eq!(queue.pop_best(|_, _| true), Some((1, 1)));
    }
}
