//! Primal-dual dual growth for covering integer programs.

use log::debug;
use ndarray::Array2;

use super::types::CoveringInstance;

/// Result of a primal-dual covering run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimalDualCoverResult {
    /// Total cost of the constructed items (`NaN` when infeasible).
    pub cost: f64,
    /// Constructed item indices, in selection order.
    pub selected: Vec<usize>,
    /// Residual demands before the first and after every selection.
    pub residuals: Vec<Vec<f64>>,
    /// Dual value recorded at each selection round, in selection order.
    pub duals: Vec<f64>,
    /// Whether every demand row was covered.
    pub feasible: bool,
}

/// Multi-row instantiation of the dual-growth skeleton.
///
/// Amortized costs start at the raw costs. Each round buys the item whose
/// amortized cost per unit of residual contribution is lowest, records
/// that ratio as the round's dual value, then pays every remaining item
/// down by `dual x its contribution`, the amount the round's growth
/// charged against its constraint.
pub fn primal_dual(instance: &CoveringInstance) -> PrimalDualCoverResult {
    debug!(
        "covering primal-dual: {} rows, {} items",
        instance.n_rows(),
        instance.n_items()
    );

    let rows = instance.n_rows();
    let items = instance.n_items();

    let mut demands = instance.demands().to_vec();
    let mut amortized = instance.costs().to_vec();
    let mut contributions = instance.contributions().clone();
    clip(&mut contributions, &demands);

    let mut unbuilt = vec![true; items];
    let mut selected = Vec::new();
    let mut duals = Vec::new();
    let mut residuals = vec![demands.clone()];

    while demands.iter().any(|&b| b > 0.0) {
        if !unbuilt.iter().any(|&u| u) {
            return PrimalDualCoverResult {
                cost: f64::NAN,
                selected,
                residuals,
                duals,
                feasible: false,
            };
        }

        // contribution of each unbuilt item over alive rows
        let mut totals = vec![0.0; items];
        for c in 0..items {
            if !unbuilt[c] {
                continue;
            }
            for r in 0..rows {
                if demands[r] > 0.0 {
                    totals[c] += contributions[[r, c]];
                }
            }
        }

        let mut item = None;
        let mut dual = f64::INFINITY;
        for c in 0..items {
            if !unbuilt[c] {
                continue;
            }
            let unit_cost = if totals[c] > 0.0 {
                amortized[c] / totals[c]
            } else {
                f64::INFINITY
            };
            if item.is_none() || unit_cost < dual {
                item = Some(c);
                dual = unit_cost;
            }
        }
        let item = item.expect("unbuilt items remain");

        unbuilt[item] = false;
        selected.push(item);
        duals.push(dual);

        // pay the remaining items down before re-clipping
        if dual.is_finite() {
            for c in 0..items {
                if unbuilt[c] {
                    amortized[c] -= totals[c] * dual;
                }
            }
        }

        for r in 0..rows {
            demands[r] = (demands[r] - contributions[[r, item]]).max(0.0);
        }
        clip(&mut contributions, &demands);
        residuals.push(demands.clone());
    }

    PrimalDualCoverResult {
        cost: instance.selection_cost(&selected),
        selected,
        residuals,
        duals,
        feasible: true,
    }
}

fn clip(contributions: &mut Array2<f64>, demands: &[f64]) {
    let (rows, items) = contributions.dim();
    for r in 0..rows {
        for c in 0..items {
            contributions[[r, c]] = contributions[[r, c]].min(demands[r]);
        }
    }
}
