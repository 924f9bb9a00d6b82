//! Pair-dominance frontier and solution backtracking.
//!
//! The knapsack dynamic programs in this crate maintain a sorted list of
//! non-dominated (value, weight) pairs — the *frontier* — instead of a full
//! DP table. Keeping the frontier dominance-free is the single control
//! point for their running time: the number of surviving pairs is bounded
//! by `min(distinct achievable values, budget)`, which bounds every
//! downstream pass.
//!
//! Each pair carries a handle into a [`DecisionArena`], an append-only tree
//! of item decisions. Walking parent handles from a winning pair back to
//! the root reconstructs the selected item set in linear time.
//!
//! # References
//!
//! - Lawler (1977), "Fast Approximation Algorithms for Knapsack Problems"

mod arena;
mod pairs;

pub use arena::{DecisionArena, NodeHandle};
pub use pairs::{merge_max, merge_min, Pair};
