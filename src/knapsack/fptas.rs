//! Input-rounding FPTAS for 0/1 knapsack.

use log::debug;

use super::dp::optimal_solution;
use super::greedy::greedy_approx;
use crate::error::Error;

/// Result of an FPTAS run on a maximization instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackFptasResult {
    /// Unrounded total profit of the selected items.
    pub value: f64,
    /// Selected item indices, ascending.
    pub solution: Vec<usize>,
}

/// Rounds fractional inputs to integers at the given precision.
///
/// Returns `floor(x * precision)` per entry (`ceil` when `round_up`).
/// Larger `precision` values imply finer rounding.
pub(crate) fn round_to_int(nums: &[f64], precision: f64, round_up: bool) -> Vec<u64> {
    nums.iter()
        .map(|&x| {
            let scaled = x * precision;
            let rounded = if round_up { scaled.ceil() } else { scaled.floor() };
            rounded as u64
        })
        .collect()
}

/// Solves knapsack on profits divided by `rounding_factor`, reporting the
/// unrounded profit of the selection. A factor of at most one means the
/// instance is already coarse enough to solve exactly.
fn round_and_solve(
    profit: &[f64],
    weight: &[u64],
    budget: u64,
    rounding_factor: f64,
) -> Result<(f64, Vec<usize>), Error> {
    let precision = if rounding_factor <= 1.0 {
        1.0
    } else {
        1.0 / rounding_factor
    };
    let scaled = round_to_int(profit, precision, false);
    let (_, sol) = optimal_solution(&scaled, weight, budget)?;
    let value = sol.iter().map(|&i| profit[i]).sum();
    Ok((value, sol))
}

/// Knapsack FPTAS via Lawler's input rounding.
///
/// A greedy 2-approximation supplies the bound the scaling factor is
/// derived from; the rounded instance is then solved exactly by the
/// pair-dominance DP. The returned value is the unrounded profit of the
/// selected items and is at least `(1 - eps)` times the optimum. `eps = 0`
/// degenerates to the exact DP.
pub fn rounding_fptas(
    profit: &[f64],
    weight: &[u64],
    budget: u64,
    eps: f64,
) -> Result<KnapsackFptasResult, Error> {
    if profit.len() != weight.len() {
        return Err(Error::DimensionMismatch {
            what: "profit vs weight",
            expected: profit.len(),
            actual: weight.len(),
        });
    }
    if !(0.0..1.0).contains(&eps) {
        return Err(Error::InvalidParameter(format!(
            "eps must be in [0, 1), got {eps}"
        )));
    }

    if profit.is_empty() {
        return Ok(KnapsackFptasResult {
            value: 0.0,
            solution: Vec::new(),
        });
    }

    let weight_f: Vec<f64> = weight.iter().map(|&w| w as f64).collect();
    let bound = greedy_approx(profit, &weight_f, budget as f64)?;
    let approx_ratio = 2.0;

    let rounding_factor = bound * eps / (profit.len() as f64 * approx_ratio);
    debug!(
        "knapsack fptas: {} items, bound {bound}, rounding factor {rounding_factor}",
        profit.len()
    );

    let (value, solution) = round_and_solve(profit, weight, budget, rounding_factor)?;
    Ok(KnapsackFptasResult { value, solution })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_int_floor() {
        assert_eq!(round_to_int(&[1.0, 2.0, 3.0], 1.0 / 10.0, false), [0, 0, 0]);
        assert_eq!(round_to_int(&[1.0, 2.0, 3.0], 1.0 / 2.0, false), [0, 1, 1]);
        assert_eq!(round_to_int(&[1.0, 2.0, 3.0], 1.0 / 3.0, false), [0, 0, 1]);
        assert_eq!(
            round_to_int(&[1.0, 2.0, 3.0, 4.0], 1.0 / 2.0, false),
            [0, 1, 1, 2]
        );
        assert_eq!(
            round_to_int(&[1.0, 2.0, 3.0, 4.0], 1.0 / 3.0, false),
            [0, 0, 1, 1]
        );
    }

    #[test]
    fn test_round_to_int_ceil() {
        assert_eq!(round_to_int(&[1.0, 2.0, 3.0], 1.0 / 10.0, true), [1, 1, 1]);
        assert_eq!(round_to_int(&[1.0, 2.0, 3.0], 1.0 / 2.0, true), [1, 1, 2]);
        assert_eq!(round_to_int(&[1.0, 2.0, 3.0], 1.0 / 3.0, true), [1, 1, 1]);
        assert_eq!(
            round_to_int(&[1.0, 2.0, 3.0, 4.0], 1.0 / 2.0, true),
            [1, 1, 2, 2]
        );
    }

    #[test]
    fn test_round_and_solve_vectors() {
        let cases: &[(&[f64], &[u64], u64, f64, f64)] = &[
            (&[], &[], 1, 0.5, 0.0),
            (&[5.0, 6.0], &[1, 1], 1, 4.0, 5.0),
            // factor below one: no rounding, optimum stays 6
            (&[5.0, 6.0], &[1, 1], 1, 0.25, 6.0),
            (&[5.0, 6.0, 7.0], &[1, 1, 1], 1, 4.0, 5.0),
            // 8 survives rounding as the distinct best
            (&[5.0, 6.0, 8.0], &[1, 1, 1], 1, 4.0, 8.0),
        ];
        for (profit, weight, budget, factor, expected) in cases {
            let (val, _) = round_and_solve(profit, weight, *budget, *factor).unwrap();
            assert!(
                (val - expected).abs() < 1e-12,
                "instance {profit:?} factor {factor}: got {val}"
            );
        }
    }

    #[test]
    fn test_round_and_solve_first_nonzero_wins() {
        for (n, factor) in [(100usize, 50.0), (1_000, 500.0), (10_000, 5_000.0)] {
            let profit: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let weight = vec![1u64; n];
            let (val, _) = round_and_solve(&profit, &weight, 1, factor).unwrap();
            assert!((val - factor).abs() < 1e-9, "n {n}: got {val}");
        }
    }

    #[test]
    fn test_fptas_rejects_bad_eps() {
        assert!(matches!(
            rounding_fptas(&[1.0], &[1], 1, 1.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            rounding_fptas(&[1.0], &[1], 1, -0.1),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_fptas_empty_instance() {
        let result = rounding_fptas(&[], &[], 1, 0.1).unwrap();
        assert_eq!(result.value, 0.0);
        assert!(result.solution.is_empty());
    }

    #[test]
    fn test_fptas_zero_eps_is_exact() {
        let result = rounding_fptas(&[12.0], &[3], 3, 0.0).unwrap();
        assert!((result.value - 12.0).abs() < 1e-12);

        let result = rounding_fptas(&[4.0, 2.0, 3.0], &[3, 1, 2], 3, 0.0).unwrap();
        assert!((result.value - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_fptas_large_profit_range() {
        let profit: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
        let weight = vec![1u64; 10_000];

        for eps in [0.5, 0.1] {
            let result = rounding_fptas(&profit, &weight, 1, eps).unwrap();
            assert!(
                result.value >= (1.0 - eps) * 9_999.0,
                "eps {eps}: got {}",
                result.value
            );
        }
    }

    #[test]
    fn test_fptas_rounds_coarse_instances() {
        // scaling factor well above one, so the DP sees genuinely coarser profits
        let profit: Vec<f64> = (0..1_000).map(|i| (i * 50) as f64).collect();
        let weight = vec![1u64; 1_000];
        let optimum: f64 = (990..1_000).map(|i| (i * 50) as f64).sum();

        let result = rounding_fptas(&profit, &weight, 10, 0.1).unwrap();
        assert!(result.value >= 0.9 * optimum, "got {}", result.value);
        assert!(result.value <= optimum + 1e-9);
    }

    #[test]
    fn test_fptas_accuracy_against_exact() {
        let profit: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
        let weight = vec![1u64; 10_000];
        let optimum: f64 = (9_990..10_000).sum::<i64>() as f64;

        for eps in [0.1, 0.01] {
            let result = rounding_fptas(&profit, &weight, 10, eps).unwrap();
            assert!(
                result.value >= (1.0 - eps) * optimum,
                "eps {eps}: got {}",
                result.value
            );
            assert!(result.value <= optimum + 1e-9);
            let total_weight: u64 = result.solution.iter().map(|&i| weight[i]).sum();
            assert!(total_weight <= 10);
        }
    }
}
