//! Approximation and exact algorithms for covering and knapsack problems.
//!
//! Two related families of NP-hard selection problems share this crate:
//!
//! - **Covering** ([`covering`]): pick a minimum-cost subset of items whose
//!   combined contributions meet per-row demands. Residual greedy,
//!   primal-dual dual growth, GRASP with local-search elimination, and a
//!   parallel knapsack-cover inequality search.
//! - **Max knapsack** ([`knapsack`]): maximize profit under a weight
//!   budget. Pair-dominance dynamic programming with backtracking, greedy
//!   and LP-relaxation bounds, and an input-rounding FPTAS.
//! - **Min-cost knapsack** ([`minknap`]): meet a weight demand at minimum
//!   cost. Primal-dual and greedy 2-approximations, a bound-truncated
//!   dynamic program, and an input-rounding FPTAS.
//!
//! The shared machinery lives in [`frontier`]: dominance-pruned
//! (value, weight) pair lists and the arena-backed backtracking tree the
//! dynamic programs reconstruct solutions from.
//!
//! # Conventions
//!
//! Shape or parameter violations fail fast with [`Error`] before any
//! algorithm runs. Unsatisfiable instances are *results*, not errors:
//! solvers report them through a feasibility flag and a sentinel value
//! (`-1` / `NaN`), keeping partial state inspectable. Randomized solvers
//! take an explicit seed and behave identically across platforms.

pub mod covering;
pub mod error;
pub mod frontier;
pub mod knapsack;
pub mod minknap;
pub mod random;

pub use error::Error;
