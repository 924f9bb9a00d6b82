//! Minimum-cost knapsack.
//!
//! Select a subset of items whose total weight meets a demand, at minimum
//! total cost. The covering twin of 0/1 knapsack, with the same toolbox:
//!
//! - **Primal-dual** ([`primal_dual`]): dual-growth 2-approximation; also
//!   produces the feasible dual certificate and the upper bound the
//!   bounded DP and the FPTAS scale by.
//! - **Greedy-half** ([`greedy_half`]): sort-based 2-approximation, the
//!   cheaper bound oracle.
//! - **Bounded DP** ([`dynamic_program`] / [`dynamic_program_bounded`]):
//!   pair-dominance dynamic program truncated at an external cost bound,
//!   which keeps the frontier small enough for input rounding to pay off.
//! - **FPTAS** ([`rounding_fptas`]): `(1 + eps)`-optimal input rounding.
//!
//! # References
//!
//! - Lawler (1977), "Fast Approximation Algorithms for Knapsack Problems"
//! - Carnes & Shmoys (2015), primal-dual for covering problems
//! - Csirik & Frenk (1991), simplified greedy for min-cost knapsack

mod dp;
mod fptas;
mod greedy;
mod primal_dual;

pub use dp::{dynamic_program, dynamic_program_bounded, BoundMethod, MinKnapResult};
pub use fptas::{rounding_fptas, MinKnapFptasResult};
pub use greedy::greedy_half;
pub use primal_dual::{primal_dual, PrimalDualResult};
