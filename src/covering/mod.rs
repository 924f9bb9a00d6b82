//! Covering integer programs.
//!
//! Choose a minimum-cost subset of items whose combined contributions meet
//! per-row demands. All solvers share the same residual mechanics: after
//! every purchase the remaining demands shrink, contributions are clipped
//! so no item over-contributes to a row, and covered rows stay dead.
//!
//! - **Greedy** ([`greedy`]): always buys the lowest unit-cost item;
//!   `O(log n)`-approximation for integral inputs, with optional
//!   contraction-factor instrumentation.
//! - **Primal-dual** ([`primal_dual`]): dual growth over the demand rows,
//!   returning the dual certificate alongside the cover.
//! - **GRASP** ([`GraspRunner`]): randomized greedy over a restricted
//!   candidate list plus local-search elimination.
//! - **Knapsack-cover search** ([`most_violated`]): parallel evaluation of
//!   candidate knapsack-cover inequalities against a fractional solution.

mod grasp;
mod greedy;
mod kc;
mod primal_dual;
mod residual;
mod types;

pub use grasp::{eliminate_redundant, GraspConfig, GraspResult, GraspRunner};
pub use greedy::{greedy, GreedyCoverResult};
pub use kc::{demand_values, most_violated, KcSearchConfig, KcViolation};
pub use primal_dual::{primal_dual, PrimalDualCoverResult};
pub use types::CoveringInstance;
