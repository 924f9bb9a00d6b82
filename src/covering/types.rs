//! Covering instance data.

use ndarray::Array2;

use crate::error::Error;

/// A validated covering problem: choose items so that weighted
/// contributions meet every row's demand, at minimum total cost.
///
/// Dimensions and signs are checked once at construction, so solvers can
/// assume `contributions` is `rows x items`, demands are strictly positive
/// and everything else is non-negative.
#[derive(Debug, Clone)]
pub struct CoveringInstance {
    contributions: Array2<f64>,
    demands: Vec<f64>,
    costs: Vec<f64>,
}

impl CoveringInstance {
    /// Builds an instance, validating shape agreement and signs.
    pub fn new(
        contributions: Array2<f64>,
        demands: Vec<f64>,
        costs: Vec<f64>,
    ) -> Result<Self, Error> {
        if contributions.nrows() != demands.len() {
            return Err(Error::DimensionMismatch {
                what: "contribution rows vs demands",
                expected: contributions.nrows(),
                actual: demands.len(),
            });
        }
        if contributions.ncols() != costs.len() {
            return Err(Error::DimensionMismatch {
                what: "contribution columns vs costs",
                expected: contributions.ncols(),
                actual: costs.len(),
            });
        }
        if demands.iter().any(|&b| b <= 0.0) {
            return Err(Error::InvalidParameter(
                "demands must be strictly positive".into(),
            ));
        }
        if costs.iter().any(|&c| c < 0.0) {
            return Err(Error::InvalidParameter("costs must be non-negative".into()));
        }
        if contributions.iter().any(|&a| a < 0.0) {
            return Err(Error::InvalidParameter(
                "contributions must be non-negative".into(),
            ));
        }

        Ok(Self {
            contributions,
            demands,
            costs,
        })
    }

    /// Number of demand rows.
    pub fn n_rows(&self) -> usize {
        self.demands.len()
    }

    /// Number of items.
    pub fn n_items(&self) -> usize {
        self.costs.len()
    }

    /// Contribution matrix, `rows x items`.
    pub fn contributions(&self) -> &Array2<f64> {
        &self.contributions
    }

    /// Per-row demands.
    pub fn demands(&self) -> &[f64] {
        &self.demands
    }

    /// Per-item costs.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Total cost of a selection.
    pub fn selection_cost(&self, selected: &[usize]) -> f64 {
        selected.iter().map(|&i| self.costs[i]).sum()
    }
}
