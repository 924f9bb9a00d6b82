//! GRASP: greedy randomized adaptive search for covering.

use log::debug;
use rand::Rng;

use super::residual::Residual;
use super::types::CoveringInstance;
use crate::error::Error;
use crate::random::create_rng;

/// Configuration for the GRASP covering solver.
///
/// # Examples
///
/// ```
/// use knapcover::covering::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_min_value(0.9)
///     .with_max_size(4)
///     .with_seed(42);
/// assert_eq!(config.max_size, Some(4));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Candidate filter: an item joins the restricted candidate list while
    /// `min_value * its unit cost` does not exceed the best unit cost.
    /// `1.0` degenerates to plain greedy; values near zero admit everyone.
    pub min_value: f64,

    /// Hard cap on the candidate list size. `None` admits all items.
    pub max_size: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            min_value: 0.8,
            max_size: None,
            seed: None,
        }
    }
}

impl GraspConfig {
    pub fn with_min_value(mut self, min_value: f64) -> Self {
        self.min_value = min_value;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.min_value > 0.0 && self.min_value <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "min_value must be in (0, 1], got {}",
                self.min_value
            )));
        }
        if self.max_size == Some(0) {
            return Err(Error::InvalidParameter(
                "max_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Result of a GRASP run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspResult {
    /// Total cost of the retained items (`NaN` when infeasible).
    pub cost: f64,
    /// Retained item indices, in selection order.
    pub selected: Vec<usize>,
    /// Whether every demand row was covered.
    pub feasible: bool,
}

/// Executes the GRASP covering heuristic.
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP: randomized greedy construction followed by a
    /// local-search elimination pass.
    ///
    /// Construction works on the same residual mechanics as the greedy
    /// solver, but instead of always buying the best item it samples
    /// uniformly from a restricted candidate list of near-best items,
    /// which usually trades a little per-step quality for a better chance
    /// of hitting a global optimum.
    ///
    /// # References
    ///
    /// - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"
    pub fn run(instance: &CoveringInstance, config: &GraspConfig) -> Result<GraspResult, Error> {
        config.validate()?;
        debug!(
            "grasp: {} rows, {} items, min_value {}, max_size {:?}",
            instance.n_rows(),
            instance.n_items(),
            config.min_value,
            config.max_size
        );

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let costs = instance.costs();
        let max_size = config.max_size.unwrap_or(instance.n_items());
        let mut residual = Residual::normalized(instance);
        let mut built = Vec::new();

        while residual.any_demand() {
            let mut ranked: Vec<(f64, usize)> = residual
                .item_contributions()
                .iter()
                .enumerate()
                .filter(|&(i, &contribution)| residual.is_unbuilt(i) && contribution > 0.0)
                .map(|(i, &contribution)| (costs[i] / contribution, i))
                .collect();
            ranked.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            if ranked.is_empty() {
                return Ok(GraspResult {
                    cost: f64::NAN,
                    selected: built,
                    feasible: false,
                });
            }

            let best_cost = ranked[0].0;
            let mut candidates = Vec::new();
            for (n, &(unit_cost, item)) in ranked.iter().enumerate() {
                if n >= max_size || config.min_value * unit_cost > best_cost {
                    break;
                }
                candidates.push(item);
            }

            let item = candidates[rng.random_range(0..candidates.len())];
            residual.select(item);
            built.push(item);
        }

        let selected = eliminate_redundant(instance, &built);
        Ok(GraspResult {
            cost: instance.selection_cost(&selected),
            selected,
            feasible: true,
        })
    }
}

/// Local-search elimination: drops items whose removal keeps every row
/// covered, scanning the construction in reverse selection order.
///
/// Drops compound within the pass: once an item is removed its
/// contribution stays freed for the remaining checks. Retained items are
/// returned in their original selection order, and running the pass again
/// on its own output changes nothing.
pub fn eliminate_redundant(instance: &CoveringInstance, built: &[usize]) -> Vec<usize> {
    let a = instance.contributions();
    let rows = instance.n_rows();

    // slack of each row under the full selection
    let mut excess: Vec<f64> = (0..rows)
        .map(|r| built.iter().map(|&i| a[[r, i]]).sum::<f64>() - instance.demands()[r])
        .collect();

    let mut retained = Vec::new();
    for &item in built.iter().rev() {
        let droppable = (0..rows).all(|r| excess[r] - a[[r, item]] >= 0.0);
        if droppable {
            for (r, slack) in excess.iter_mut().enumerate() {
                *slack -= a[[r, item]];
            }
        } else {
            retained.push(item);
        }
    }

    retained.reverse();
    retained
}
