//! Dominance-pruned (value, weight) pair lists.

use super::arena::NodeHandle;

/// One frontier entry: accumulated value, accumulated weight, and the
/// backtracking node that produced it.
///
/// `value` is the integral profit (maximization) or cost (minimization)
/// accumulated so far; the weight type is `u64` for budget-constrained
/// knapsack and `f64` for demand-constrained min-cost knapsack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair<W> {
    /// Accumulated profit or cost.
    pub value: u64,
    /// Accumulated weight.
    pub weight: W,
    /// Backtracking handle; `NodeHandle::ROOT` when no solution is tracked.
    pub node: NodeHandle,
}

impl<W> Pair<W> {
    /// Creates a pair.
    pub fn new(value: u64, weight: W, node: NodeHandle) -> Self {
        Self {
            value,
            weight,
            node,
        }
    }
}

/// Merges two sorted, dominance-free pair lists in the maximization sense.
///
/// A pair is *dominated* if another pair has at least as much profit and no
/// more weight. Both inputs must be in ascending (value, weight) order —
/// which for a dominance-free list is one and the same order. Ties are
/// resolved in favor of `old`, so the earliest creator of a value-weight
/// combination survives. The result is again sorted and dominance-free.
pub fn merge_max(old: Vec<Pair<u64>>, new: Vec<Pair<u64>>) -> Vec<Pair<u64>> {
    let mut merged = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0, 0);

    while i < old.len() && j < new.len() {
        let a = old[i];
        let b = new[j];

        if a.value >= b.value && a.weight <= b.weight {
            // new dominated by old; old is pushed once it wins its slot
            j += 1;
        } else if b.value >= a.value && b.weight <= a.weight {
            // old dominated by new
            i += 1;
        } else if a.weight < b.weight {
            // incomparable, old is lighter
            merged.push(a);
            i += 1;
        } else {
            // incomparable, new is lighter
            merged.push(b);
            j += 1;
        }
    }

    merged.extend_from_slice(&old[i..]);
    merged.extend_from_slice(&new[j..]);
    merged
}

/// Merges two sorted, dominance-free pair lists in the minimization sense.
///
/// Here a pair is dominated if another pair has no higher cost and at least
/// as much weight — the dominance direction flips with the optimization
/// sense. Inputs are in ascending (cost, weight) order; ties prefer `old`.
pub fn merge_min(old: Vec<Pair<f64>>, new: Vec<Pair<f64>>) -> Vec<Pair<f64>> {
    let mut merged = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0, 0);

    while i < old.len() && j < new.len() {
        let a = old[i];
        let b = new[j];

        if a.value <= b.value && a.weight >= b.weight {
            // new dominated by old
            j += 1;
        } else if b.value <= a.value && b.weight >= a.weight {
            // old dominated by new
            i += 1;
        } else if a.value < b.value {
            // incomparable, old is cheaper
            merged.push(a);
            i += 1;
        } else {
            // incomparable, new is cheaper
            merged.push(b);
            j += 1;
        }
    }

    merged.extend_from_slice(&old[i..]);
    merged.extend_from_slice(&new[j..]);
    merged
}
