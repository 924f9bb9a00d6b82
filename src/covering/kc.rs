//! Knapsack-cover inequality search.
//!
//! Building blocks for strengthening a covering LP with knapsack-cover
//! inequalities: the geometric grid of residual demand values that must be
//! checked for an `epsilon`-most-violated inequality, and the search that
//! prices one row's items against a fractional solution and solves a
//! min-cost knapsack per candidate demand. The candidate evaluations are
//! independent and side-effect free, so they fan out across a worker pool.
//!
//! The cutting-plane loop that would feed these inequalities back into an
//! LP lives outside this crate.
//!
//! # References
//!
//! - Carr, Fleischer, Leung & Phillips (1999), knapsack-cover inequalities
//! - Chekuri & Quanrud (2019), "Fast Algorithms for Solving the Knapsack-Cover LP"

use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::*;

use super::types::CoveringInstance;
use crate::error::Error;
use crate::minknap::{rounding_fptas, BoundMethod};

/// Configuration for the most-violated-inequality search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KcSearchConfig {
    /// Accuracy of the search; also the `eps` handed to the inner FPTAS.
    pub epsilon: f64,
    /// Scale at which contributions and demands are rounded to integers.
    pub tolerance: f64,
    /// Worker threads for the per-candidate fan-out. `0` uses the global pool.
    pub num_threads: usize,
}

impl Default for KcSearchConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            tolerance: 1e-6,
            num_threads: 0,
        }
    }
}

impl KcSearchConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.epsilon <= 0.0 || self.epsilon >= 1.0 {
            return Err(Error::InvalidParameter(format!(
                "epsilon must be in (0, 1), got {}",
                self.epsilon
            )));
        }
        if self.tolerance <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// One evaluated knapsack-cover candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KcViolation {
    /// The residual demand value this candidate was evaluated at.
    pub residual_demand: u64,
    /// Left-hand side of the candidate inequality (`-1.0` when the
    /// sub-problem is infeasible at this demand).
    pub value: f64,
    /// Items defining the candidate constraint.
    pub items: Vec<usize>,
    /// Whether the sub-problem was feasible.
    pub feasible: bool,
}

/// Residual demand values to check for an `epsilon`-violated inequality.
///
/// For integral contributions capped at the demand `D`, it suffices to
/// check the geometric grid `ceil((1 + eps)^k)` for
/// `k = 0..ceil(log_{1+eps} D)` instead of every value up to `D`.
pub fn demand_values(demand: u64, epsilon: f64) -> Vec<u64> {
    let steps = if demand > 1 {
        ((demand as f64).ln() / (1.0 + epsilon).ln()).ceil().max(0.0) as u32
    } else {
        0
    };

    let grid: BTreeSet<u64> = (0..=steps)
        .map(|k| (1.0 + epsilon).powi(k as i32).ceil() as u64)
        .collect();
    grid.into_iter().collect()
}

/// Finds the most violated knapsack-cover inequality candidates for `row`
/// against the fractional solution `x`.
///
/// Contributions and the row demand are rounded to integers at
/// `config.tolerance`; each candidate residual demand `d` from
/// [`demand_values`] then defines an independent min-cost knapsack
/// (contributions clamped at `d`, items priced by `x`), solved by the
/// rounding FPTAS. Every evaluation is pure, so they run in parallel and
/// the results are joined in grid order.
pub fn most_violated(
    instance: &CoveringInstance,
    row: usize,
    x: &[f64],
    config: &KcSearchConfig,
) -> Result<Vec<KcViolation>, Error> {
    config.validate()?;
    if row >= instance.n_rows() {
        return Err(Error::InvalidParameter(format!(
            "row {row} out of range for {} rows",
            instance.n_rows()
        )));
    }
    if x.len() != instance.n_items() {
        return Err(Error::DimensionMismatch {
            what: "solution vector vs items",
            expected: instance.n_items(),
            actual: x.len(),
        });
    }

    let contributions: Vec<f64> = (0..instance.n_items())
        .map(|i| (instance.contributions()[[row, i]] / config.tolerance).ceil())
        .collect();
    let demand = (instance.demands()[row] / config.tolerance).ceil() as u64;
    let total: f64 = contributions.iter().sum();

    let grid = demand_values(demand, config.epsilon);
    debug!(
        "kc search: row {row}, demand {demand}, {} candidate values",
        grid.len()
    );

    let evaluate = |&d: &u64| -> Result<KcViolation, Error> {
        let clamped: Vec<f64> = contributions.iter().map(|&a| a.min(d as f64)).collect();
        let prices: Vec<f64> = clamped
            .iter()
            .zip(x)
            .map(|(&a, &xi)| a * xi / d as f64)
            .collect();
        let requirement = total - demand as f64 + d as f64;

        let result = rounding_fptas(
            &prices,
            &clamped,
            requirement,
            config.epsilon,
            BoundMethod::GreedyHalf,
        )?;
        Ok(KcViolation {
            residual_demand: d,
            value: result.value,
            items: result.solution,
            feasible: result.feasible,
        })
    };

    if config.num_threads == 0 {
        grid.par_iter().map(evaluate).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()
            .map_err(|e| Error::InvalidParameter(format!("worker pool: {e}")))?;
        pool.install(|| grid.par_iter().map(evaluate).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_demand_values_vectors() {
        assert_eq!(demand_values(4, 1.0), vec![1, 2, 4]);
        assert_eq!(demand_values(3, 0.5), vec![1, 2, 3, 4]);
        assert_eq!(demand_values(1, 1.0), vec![1]);
    }

    #[test]
    fn test_demand_values_cover_demand() {
        for demand in [2u64, 7, 10, 100, 1000] {
            for epsilon in [0.1, 0.5, 0.9] {
                let grid = demand_values(demand, epsilon);
                assert_eq!(grid[0], 1);
                assert!(
                    *grid.last().unwrap() >= demand,
                    "demand {demand} eps {epsilon}: grid {grid:?}"
                );
                for window in grid.windows(2) {
                    assert!(window[0] < window[1]);
                }
            }
        }
    }

    #[test]
    fn test_config_validate() {
        assert!(KcSearchConfig::default().validate().is_ok());
        assert!(KcSearchConfig::default().with_epsilon(0.0).validate().is_err());
        assert!(KcSearchConfig::default().with_epsilon(1.0).validate().is_err());
        assert!(KcSearchConfig::default().with_tolerance(0.0).validate().is_err());
    }

    fn search_instance() -> CoveringInstance {
        CoveringInstance::new(array![[2.0, 3.0]], vec![4.0], vec![1.0, 1.0]).unwrap()
    }

    #[test]
    fn test_most_violated_grid_evaluated() {
        let config = KcSearchConfig::default()
            .with_epsilon(0.5)
            .with_tolerance(1.0);
        let results = most_violated(&search_instance(), 0, &[0.5, 0.5], &config).unwrap();

        // grid for demand 4 at eps 0.5 is [1, 2, 3, 4, 6]
        let demands: Vec<u64> = results.iter().map(|v| v.residual_demand).collect();
        assert_eq!(demands, vec![1, 2, 3, 4, 6]);

        // d = 1: both unit contributions are needed, value (0.5 + 0.5) / 1
        let first = &results[0];
        assert!(first.feasible);
        assert!((first.value - 1.0).abs() < 1e-9);
        assert_eq!(first.items, vec![0, 1]);

        // d = 6: clamped contributions sum to 5 < requirement 7
        let last = results.last().unwrap();
        assert!(!last.feasible);
        assert_eq!(last.value, -1.0);
    }

    #[test]
    fn test_most_violated_dedicated_pool() {
        let config = KcSearchConfig::default()
            .with_epsilon(0.5)
            .with_tolerance(1.0)
            .with_num_threads(2);
        let results = most_violated(&search_instance(), 0, &[1.0, 0.5], &config).unwrap();
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_most_violated_row_out_of_range() {
        let config = KcSearchConfig::default();
        assert!(matches!(
            most_violated(&search_instance(), 3, &[0.5, 0.5], &config),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_most_violated_solution_length_checked() {
        let config = KcSearchConfig::default();
        assert!(matches!(
            most_violated(&search_instance(), 0, &[0.5], &config),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
