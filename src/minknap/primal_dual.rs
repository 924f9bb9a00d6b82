//! Primal-dual dual-growth algorithm for min-cost knapsack.

use log::{debug, trace};

use crate::error::Error;

/// Result of a primal-dual run.
///
/// `value` is the total cost of the selected items, or `-1.0` when the
/// demand cannot be met. `duals` holds the dual value recorded at each
/// selection round, in selection order; together they form a feasible dual
/// certificate for feasible runs, and the partial certificate built so far
/// for infeasible ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimalDualResult {
    /// Total cost of the selection (`-1.0` when infeasible).
    pub value: f64,
    /// Selected item indices, ascending. Empty when infeasible.
    pub solution: Vec<usize>,
    /// Dual values in selection order.
    pub duals: Vec<f64>,
    /// Whether the demand was met.
    pub feasible: bool,
}

/// Finds an approximately minimum-cost feasible knapsack.
///
/// Starts from an infeasible primal and a feasible all-zero dual, then
/// uniformly raises dual values until some item's amortized cost goes
/// tight, buys that item, and pays the remaining items down in proportion
/// to the contribution they would have made this round. The returned cost
/// is at most twice the optimum, which is what qualifies it as the scaling
/// anchor for the rounding FPTAS.
///
/// # References
///
/// - Carnes & Shmoys (2015)
pub fn primal_dual(cost: &[f64], weight: &[f64], demand: f64) -> Result<PrimalDualResult, Error> {
    if cost.len() != weight.len() {
        return Err(Error::DimensionMismatch {
            what: "cost vs weight",
            expected: cost.len(),
            actual: weight.len(),
        });
    }

    let n = cost.len();
    debug!("minknap primal-dual: {n} items, demand {demand}");

    let mut amortized = cost.to_vec();
    let mut remaining = weight.to_vec();
    let mut selected = vec![false; n];
    let mut order = Vec::new();
    let mut duals = Vec::new();
    let mut residual = demand;

    for _ in 0..n {
        if residual <= 0.0 {
            break;
        }

        // clamp contributions so nothing over-covers the residual demand
        for i in 0..n {
            if !selected[i] {
                remaining[i] = remaining[i].min(residual);
            }
        }

        // tightest item: minimum amortized cost per unit of contribution
        let mut item = usize::MAX;
        let mut dual = f64::INFINITY;
        for i in 0..n {
            if selected[i] {
                continue;
            }
            let unit_cost = if remaining[i] > 0.0 {
                amortized[i] / remaining[i]
            } else {
                f64::INFINITY
            };
            if item == usize::MAX || unit_cost < dual {
                item = i;
                dual = unit_cost;
            }
        }

        selected[item] = true;
        order.push(item);
        residual -= remaining[item];
        duals.push(dual);
        trace!("round {}: item {item}, dual {dual}, residual {residual}", order.len());

        // pay down the others proportionally to this round's contributions
        if dual.is_finite() {
            for i in 0..n {
                if !selected[i] {
                    amortized[i] -= remaining[i] * dual;
                }
            }
        }
    }

    if residual > 0.0 {
        return Ok(PrimalDualResult {
            value: -1.0,
            solution: Vec::new(),
            duals,
            feasible: false,
        });
    }

    let value = order.iter().map(|&i| cost[i]).sum();
    let mut solution = order;
    solution.sort_unstable();

    Ok(PrimalDualResult {
        value,
        solution,
        duals,
        feasible: true,
    })
}
