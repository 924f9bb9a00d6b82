//! Bound-truncated dynamic program for min-cost knapsack.

use log::debug;

use super::greedy::greedy_half;
use super::primal_dual::primal_dual;
use crate::error::Error;
use crate::frontier::{merge_min, DecisionArena, NodeHandle, Pair};

/// Which 2-approximation supplies the cost bound for the DP and the FPTAS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundMethod {
    /// Dual-growth primal-dual algorithm.
    #[default]
    PrimalDual,
    /// Sort-based greedy of Csirik & Frenk.
    GreedyHalf,
}

/// Result of a min-cost knapsack DP run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinKnapResult {
    /// Minimum cost meeting the demand, or `-1` when infeasible.
    pub value: i64,
    /// Selected item indices, ascending. Empty when infeasible.
    pub solution: Vec<usize>,
    /// Whether the demand can be met at all within the bound.
    pub feasible: bool,
}

impl MinKnapResult {
    fn infeasible() -> Self {
        Self {
            value: -1,
            solution: Vec::new(),
            feasible: false,
        }
    }
}

/// Returns the optimal min-cost knapsack value and solution.
///
/// Computes a 2-approximate cost bound with `method`, then resolves the
/// instance exactly with [`dynamic_program_bounded`]. Runs in
/// `O(n * bound)`, so the bound quality directly caps the work.
pub fn dynamic_program(
    cost: &[u64],
    weight: &[f64],
    demand: f64,
    method: BoundMethod,
) -> Result<MinKnapResult, Error> {
    check_lengths(cost, weight)?;
    if cost.is_empty() {
        return Ok(MinKnapResult::infeasible());
    }

    let cost_f: Vec<f64> = cost.iter().map(|&c| c as f64).collect();
    let (bound, _) = upper_bound(&cost_f, weight, demand, method)?;
    if bound <= 0.0 {
        return Ok(MinKnapResult::infeasible());
    }

    // achievable costs are integral, so flooring the bound loses nothing
    dynamic_program_bounded(cost, weight, demand, bound.floor() as u64)
}

/// Returns the min-cost knapsack value under an externally supplied bound.
///
/// Expands the frontier of non-dominated (cost, weight) pairs one item at
/// a time, discarding any candidate whose accumulated cost would exceed
/// `upper_bound`. Since the frontier is sorted by cost, generation breaks
/// at the first oversized pair. The optimum is the first surviving pair
/// whose weight meets the demand.
///
/// When the bound comes from an `alpha`-approximation the frontier never
/// holds more than `alpha * optimum` pairs, which is what makes input
/// rounding productive.
pub fn dynamic_program_bounded(
    cost: &[u64],
    weight: &[f64],
    demand: f64,
    upper_bound: u64,
) -> Result<MinKnapResult, Error> {
    check_lengths(cost, weight)?;
    debug!(
        "minknap dp: {} items, demand {demand}, bound {upper_bound}",
        cost.len()
    );

    if weight.iter().sum::<f64>() < demand {
        return Ok(MinKnapResult::infeasible());
    }

    let mut arena = DecisionArena::new();
    let mut pairs = vec![Pair::new(0, 0.0, NodeHandle::ROOT)];

    for (i, (&c, &w)) in cost.iter().zip(weight).enumerate() {
        let mut fresh = Vec::new();
        for pair in &pairs {
            if pair.value + c > upper_bound {
                break;
            }
            let node = arena.record(i, pair.node);
            fresh.push(Pair::new(pair.value + c, pair.weight + w, node));
        }
        pairs = merge_min(pairs, fresh);
    }

    // frontier is sorted by cost; the first feasible pair is optimal
    match pairs.iter().find(|pair| pair.weight >= demand) {
        Some(best) => {
            let mut solution = arena.unwind(best.node);
            solution.reverse();
            Ok(MinKnapResult {
                value: best.value as i64,
                solution,
                feasible: true,
            })
        }
        None => Ok(MinKnapResult::infeasible()),
    }
}

/// Constant-factor bound for min-cost knapsack.
///
/// Returns `(upper, lower)` where `upper` is the chosen approximation's
/// value and `lower = upper / 2` exploits its factor-2 guarantee. Both are
/// `-1.0` when the instance is infeasible.
pub(crate) fn upper_bound(
    cost: &[f64],
    weight: &[f64],
    demand: f64,
    method: BoundMethod,
) -> Result<(f64, f64), Error> {
    let value = match method {
        BoundMethod::PrimalDual => primal_dual(cost, weight, demand)?.value,
        BoundMethod::GreedyHalf => greedy_half(cost, weight, demand).0,
    };

    if value <= 0.0 {
        return Ok((-1.0, -1.0));
    }
    Ok((value, value / 2.0))
}

fn check_lengths(cost: &[u64], weight: &[f64]) -> Result<(), Error> {
    if cost.len() != weight.len() {
        return Err(Error::DimensionMismatch {
            what: "cost vs weight",
            expected: cost.len(),
            actual: weight.len(),
        });
    }
    Ok(())
}
