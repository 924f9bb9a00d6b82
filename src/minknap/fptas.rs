//! Input-rounding FPTAS for min-cost knapsack.

use log::debug;

use super::dp::{dynamic_program_bounded, upper_bound, BoundMethod};
use crate::error::Error;
use crate::knapsack::round_to_int;

/// Result of an FPTAS run on a minimization instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinKnapFptasResult {
    /// Unrounded total cost of the selected items (`-1.0` when infeasible).
    pub value: f64,
    /// Selected item indices, ascending. Empty when infeasible.
    pub solution: Vec<usize>,
    /// Whether the demand can be met.
    pub feasible: bool,
}

impl MinKnapFptasResult {
    fn infeasible() -> Self {
        Self {
            value: -1.0,
            solution: Vec::new(),
            feasible: false,
        }
    }
}

/// `(1 + eps)`-approximation for min-cost knapsack via input rounding.
///
/// A 2-approximate bound `B` fixes the scaling factor
/// `K = B * eps / (n * alpha)`; costs are floor-divided by `K`, items whose
/// cost rounds to zero are bought outright, and the remaining residual
/// instance is resolved exactly by the bounded DP with `B / K` as its cost
/// bound. The reported value is the unrounded cost of the selection, so
/// the `(1 + eps)` guarantee is relative to the true optimum, never the
/// rounded one.
///
/// # References
///
/// - Lawler (1977), "Fast Approximation Algorithms for Knapsack Problems"
pub fn rounding_fptas(
    cost: &[f64],
    weight: &[f64],
    demand: f64,
    eps: f64,
    method: BoundMethod,
) -> Result<MinKnapFptasResult, Error> {
    if cost.len() != weight.len() {
        return Err(Error::DimensionMismatch {
            what: "cost vs weight",
            expected: cost.len(),
            actual: weight.len(),
        });
    }
    if eps <= 0.0 || eps >= 1.0 {
        return Err(Error::InvalidParameter(format!(
            "eps must be in (0, 1), got {eps}"
        )));
    }

    if cost.is_empty() {
        return Ok(MinKnapFptasResult::infeasible());
    }

    let (bound, lower) = upper_bound(cost, weight, demand, method)?;
    if bound <= 0.0 {
        return Ok(MinKnapFptasResult::infeasible());
    }

    let alpha = bound / lower;
    let scale = bound * eps / (cost.len() as f64 * alpha);
    let rounded = round_to_int(cost, 1.0 / scale, false);
    debug!(
        "minknap fptas: {} items, bound {bound}, scale {scale}",
        cost.len()
    );

    // items whose cost rounds to zero are free at this precision
    let mut solution = Vec::new();
    let mut residual = demand;
    for (i, &c) in rounded.iter().enumerate() {
        if residual <= 0.0 {
            break;
        }
        if c == 0 {
            solution.push(i);
            residual -= weight[i];
        }
    }

    if residual > 0.0 {
        let kept: Vec<usize> = (0..cost.len()).filter(|&i| rounded[i] > 0).collect();
        let kept_cost: Vec<u64> = kept.iter().map(|&i| rounded[i]).collect();
        let kept_weight: Vec<f64> = kept.iter().map(|&i| weight[i]).collect();

        let dp = dynamic_program_bounded(
            &kept_cost,
            &kept_weight,
            residual,
            (bound / scale).floor() as u64,
        )?;
        if !dp.feasible {
            return Ok(MinKnapFptasResult::infeasible());
        }
        solution.extend(dp.solution.iter().map(|&j| kept[j]));
    }

    solution.sort_unstable();
    let value = solution.iter().map(|&i| cost[i]).sum();

    Ok(MinKnapFptasResult {
        value,
        solution,
        feasible: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fptas_rejects_bad_eps() {
        for eps in [0.0, 1.0, 1.5, -0.2] {
            assert!(matches!(
                rounding_fptas(&[1.0], &[1.0], 1.0, eps, BoundMethod::GreedyHalf),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_fptas_empty_instance() {
        let result = rounding_fptas(&[], &[], 1.0, 0.1, BoundMethod::GreedyHalf).unwrap();
        assert!(!result.feasible);
        assert_eq!(result.value, -1.0);
    }

    #[test]
    fn test_fptas_unmeetable_demand() {
        let result = rounding_fptas(&[1.0], &[1.0], 10.0, 0.5, BoundMethod::GreedyHalf).unwrap();
        assert!(!result.feasible);
        assert!(result.solution.is_empty());
    }

    #[test]
    fn test_fptas_single_item() {
        let result = rounding_fptas(&[1.0], &[1.0], 1.0, 0.001, BoundMethod::GreedyHalf).unwrap();
        assert!(result.feasible);
        assert!(close(result.value, 1.0));
        assert_eq!(result.solution, vec![0]);
    }

    #[test]
    fn test_fptas_picks_cheaper_twin() {
        let result =
            rounding_fptas(&[2.0, 1.0], &[2.0, 1.0], 1.0, 0.5, BoundMethod::GreedyHalf).unwrap();
        assert!(close(result.value, 1.0));
        assert_eq!(result.solution, vec![1]);
    }

    #[test]
    fn test_fptas_two_cheapest_cover() {
        let result = rounding_fptas(
            &[1.0, 2.0, 5.0],
            &[2.0, 2.0, 2.0],
            3.0,
            0.9,
            BoundMethod::GreedyHalf,
        )
        .unwrap();
        assert!(close(result.value, 3.0));
        assert_eq!(result.solution, vec![0, 1]);
    }

    #[test]
    fn test_fptas_zero_rounded_items_bought_first() {
        // item 0's cost vanishes at the chosen precision
        let result = rounding_fptas(
            &[0.01, 10.0, 10.0],
            &[5.0, 5.0, 5.0],
            9.0,
            0.5,
            BoundMethod::GreedyHalf,
        )
        .unwrap();
        assert!(result.feasible);
        assert!(close(result.value, 10.01));
        assert_eq!(result.solution, vec![0, 1]);
    }

    #[test]
    fn test_fptas_fractional_inputs() {
        let result = rounding_fptas(
            &[2.1, 1.5],
            &[2.0, 2.0],
            2.0,
            0.001,
            BoundMethod::GreedyHalf,
        )
        .unwrap();
        assert!(close(result.value, 1.5));
        assert_eq!(result.solution, vec![1]);

        let result = rounding_fptas(
            &[2.4, 11.6, 1.8],
            &[1.5, 0.4, 2.5],
            4.0,
            0.02,
            BoundMethod::GreedyHalf,
        )
        .unwrap();
        assert!(close(result.value, 4.2));
        assert_eq!(result.solution, vec![0, 2]);
    }

    #[test]
    fn test_fptas_accuracy_bound() {
        use crate::random::create_rng;
        use rand::Rng;

        let mut rng = create_rng(23);

        for method in [BoundMethod::PrimalDual, BoundMethod::GreedyHalf] {
            for _ in 0..30 {
                let n = rng.random_range(2..8usize);
                let cost: Vec<f64> =
                    (0..n).map(|_| rng.random_range(1..12u32) as f64).collect();
                let weight: Vec<f64> =
                    (0..n).map(|_| rng.random_range(1..7u32) as f64).collect();
                let total: f64 = weight.iter().sum();
                let demand = rng.random_range(1.0..total.max(1.5));
                let eps = rng.random_range(0.05..0.9);

                let result = rounding_fptas(&cost, &weight, demand, eps, method).unwrap();
                assert!(result.feasible);

                let mut best = f64::INFINITY;
                for mask in 0u32..(1 << n) {
                    let (mut c, mut w) = (0.0, 0.0);
                    for i in 0..n {
                        if mask & (1 << i) != 0 {
                            c += cost[i];
                            w += weight[i];
                        }
                    }
                    if w >= demand && c < best {
                        best = c;
                    }
                }

                assert!(
                    result.value <= (1.0 + eps) * best + 1e-9,
                    "{method:?} cost {cost:?} weight {weight:?} demand {demand} eps {eps}: \
                     {} > (1 + {eps}) * {best}",
                    result.value
                );
                assert!(result.value >= best - 1e-9);

                let covered: f64 = result.solution.iter().map(|&i| weight[i]).sum();
                assert!(covered >= demand);
            }
        }
    }
}
