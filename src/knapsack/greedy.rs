//! Greedy and LP-relaxation bounds for 0/1 knapsack.

use std::cmp::Ordering;

use crate::error::Error;

/// Solves the LP relaxation of 0/1 knapsack.
///
/// Items are taken whole in decreasing profit-density order; the first item
/// that no longer fits is taken fractionally. Returns the relaxation value
/// and the per-item (fractional) solution vector.
pub fn solve_relaxation(
    profit: &[f64],
    weight: &[f64],
    budget: f64,
) -> Result<(f64, Vec<f64>), Error> {
    check_lengths(profit, weight)?;

    let order = density_order(profit, weight);
    let mut residual = budget;
    let mut value = 0.0;
    let mut sol = vec![0.0; profit.len()];

    for i in order {
        if residual >= weight[i] {
            value += profit[i];
            residual -= weight[i];
            sol[i] = 1.0;
        } else {
            value += residual * profit[i] / weight[i];
            sol[i] = residual / weight[i];
            break;
        }
    }

    Ok((value, sol))
}

/// Returns a greedy 2-approximation of the optimal knapsack profit.
///
/// Fills the budget in decreasing density order, then returns the better of
/// the greedy packing and the single most profitable item. Assuming every
/// item fits the budget on its own, the result is at least half the
/// optimum, so twice this value is the upper bound the FPTAS scales by.
pub fn greedy_approx(profit: &[f64], weight: &[f64], budget: f64) -> Result<f64, Error> {
    check_lengths(profit, weight)?;

    if profit.is_empty() {
        return Ok(0.0);
    }

    let order = density_order(profit, weight);
    let mut residual = budget;
    let mut value = 0.0;

    for i in order {
        if residual < weight[i] {
            break;
        }
        value += profit[i];
        residual -= weight[i];
    }

    let best_single = profit.iter().cloned().fold(f64::MIN, f64::max);
    Ok(value.max(best_single))
}

/// Item indices in decreasing profit-per-weight order; density ties fall
/// back to higher profit, then lower index.
fn density_order(profit: &[f64], weight: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..profit.len()).collect();
    order.sort_by(|&a, &b| {
        let da = profit[a] / weight[a];
        let db = profit[b] / weight[b];
        db.partial_cmp(&da)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                profit[b]
                    .partial_cmp(&profit[a])
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.cmp(&b))
    });
    order
}

fn check_lengths(profit: &[f64], weight: &[f64]) -> Result<(), Error> {
    if profit.len() != weight.len() {
        return Err(Error::DimensionMismatch {
            what: "profit vs weight",
            expected: profit.len(),
            actual: weight.len(),
        });
    }
    Ok(())
}
