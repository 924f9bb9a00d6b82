//! Pair-dominance dynamic program for 0/1 knapsack.

use log::debug;

use crate::error::Error;
use crate::frontier::{merge_max, DecisionArena, NodeHandle, Pair};

/// Returns the maximum total profit packable within `budget`.
///
/// Runs in `O(n * min(P*, budget))` where `P*` is the optimal profit: the
/// frontier of non-dominated (profit, weight) pairs holds at most one pair
/// per distinct profit and per distinct weight.
pub fn optimal_value(profit: &[u64], weight: &[u64], budget: u64) -> Result<u64, Error> {
    check_lengths(profit, weight)?;

    let mut pairs = vec![Pair::new(0, 0, NodeHandle::ROOT)];

    for (&p, &w) in profit.iter().zip(weight) {
        let mut fresh = Vec::new();
        for pair in &pairs {
            // frontier is sorted by weight, so later pairs only get heavier
            if pair.weight + w > budget {
                break;
            }
            fresh.push(Pair::new(pair.value + p, pair.weight + w, NodeHandle::ROOT));
        }
        pairs = merge_max(pairs, fresh);
    }

    Ok(pairs.last().map(|p| p.value).unwrap_or(0))
}

/// Returns the maximum profit together with the item indices attaining it.
///
/// Each frontier pair carries a handle into a [`DecisionArena`]; walking
/// parent handles from the winning pair to the root yields the selected
/// items in reverse order.
pub fn optimal_solution(
    profit: &[u64],
    weight: &[u64],
    budget: u64,
) -> Result<(u64, Vec<usize>), Error> {
    check_lengths(profit, weight)?;
    debug!(
        "knapsack dp: {} items, budget {}",
        profit.len(),
        budget
    );

    let mut arena = DecisionArena::new();
    let mut pairs = vec![Pair::new(0, 0, NodeHandle::ROOT)];

    for (i, (&p, &w)) in profit.iter().zip(weight).enumerate() {
        let mut fresh = Vec::new();
        for pair in &pairs {
            if pair.weight + w > budget {
                break;
            }
            let node = arena.record(i, pair.node);
            fresh.push(Pair::new(pair.value + p, pair.weight + w, node));
        }
        pairs = merge_max(pairs, fresh);
    }

    let best = pairs.last().expect("frontier always holds the empty pair");
    let mut items = arena.unwind(best.node);
    items.reverse();

    Ok((best.value, items))
}

fn check_lengths(profit: &[u64], weight: &[u64]) -> Result<(), Error> {
    if profit.len() != weight.len() {
        return Err(Error::DimensionMismatch {
            what: "profit vs weight",
            expected: profit.len(),
            actual: weight.len(),
        });
    }
    Ok(())
}
