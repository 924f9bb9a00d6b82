//! Residual state shared by the greedy-family covering solvers.

use ndarray::Array2;

use super::types::CoveringInstance;

/// Mutable view of the remaining sub-problem in demand-normalized units.
///
/// Contributions are clipped so no item can over-contribute beyond a row's
/// remaining requirement, then each row is scaled by its demand so every
/// residual starts at exactly `1.0`. Residuals only ever decrease, and a
/// row that reaches zero stays dead: its contribution row is clipped to
/// zero along with it.
pub(crate) struct Residual {
    contributions: Array2<f64>,
    demands: Vec<f64>,
    unbuilt: Vec<bool>,
}

impl Residual {
    /// Builds the normalized residual state for a fresh instance.
    pub(crate) fn normalized(instance: &CoveringInstance) -> Self {
        let rows = instance.n_rows();
        let items = instance.n_items();
        let b = instance.demands();

        let mut a = instance.contributions().clone();
        for r in 0..rows {
            for c in 0..items {
                a[[r, c]] = a[[r, c]].min(b[r]) / b[r];
            }
        }

        Self {
            contributions: a,
            demands: vec![1.0; rows],
            unbuilt: vec![true; items],
        }
    }

    /// Whether any row still has outstanding demand.
    pub(crate) fn any_demand(&self) -> bool {
        self.demands.iter().any(|&b| b > 0.0)
    }

    /// Whether any item remains selectable.
    pub(crate) fn has_unbuilt(&self) -> bool {
        self.unbuilt.iter().any(|&u| u)
    }

    pub(crate) fn is_unbuilt(&self, item: usize) -> bool {
        self.unbuilt[item]
    }

    /// Total residual contribution of each item across alive rows.
    /// Built items report zero.
    pub(crate) fn item_contributions(&self) -> Vec<f64> {
        let (rows, items) = self.contributions.dim();
        let mut totals = vec![0.0; items];
        for c in 0..items {
            if !self.unbuilt[c] {
                continue;
            }
            for r in 0..rows {
                if self.demands[r] > 0.0 {
                    totals[c] += self.contributions[[r, c]];
                }
            }
        }
        totals
    }

    /// Per-item column sums over all rows, for contraction instrumentation.
    pub(crate) fn column_sums(&self) -> Vec<f64> {
        let (rows, items) = self.contributions.dim();
        let mut sums = vec![0.0; items];
        for c in 0..items {
            for r in 0..rows {
                sums[c] += self.contributions[[r, c]];
            }
        }
        sums
    }

    /// Buys `item`: subtracts its contribution from every row's residual,
    /// re-clips the matrix at the new residuals, and retires the item.
    pub(crate) fn select(&mut self, item: usize) {
        let (rows, items) = self.contributions.dim();
        for r in 0..rows {
            self.demands[r] = (self.demands[r] - self.contributions[[r, item]]).max(0.0);
            for c in 0..items {
                self.contributions[[r, c]] = self.contributions[[r, c]].min(self.demands[r]);
            }
        }
        self.unbuilt[item] = false;
    }

    /// Snapshot of the residual demands.
    pub(crate) fn demands(&self) -> Vec<f64> {
        self.demands.clone()
    }
}
