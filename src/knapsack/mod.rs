//! 0/1 maximum-profit knapsack.
//!
//! Select a subset of items maximizing total profit without exceeding a
//! weight budget. Three solution routes:
//!
//! - **Exact DP** ([`optimal_value`] / [`optimal_solution`]): Lawler-style
//!   pair-dominance dynamic program, pseudo-polynomial in
//!   `min(max profit, budget)`.
//! - **Greedy** ([`greedy_approx`] / [`solve_relaxation`]): density-ordered
//!   2-approximation and the LP relaxation it derives from.
//! - **FPTAS** ([`rounding_fptas`]): input rounding against the greedy
//!   bound, then exact DP on the scaled instance; `(1 - eps)`-optimal.
//!
//! # References
//!
//! - Lawler (1977), "Fast Approximation Algorithms for Knapsack Problems"

mod dp;
mod fptas;
mod greedy;

pub use dp::{optimal_solution, optimal_value};
pub use fptas::{rounding_fptas, KnapsackFptasResult};
pub use greedy::{greedy_approx, solve_relaxation};

pub(crate) use fptas::round_to_int;
