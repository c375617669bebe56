//! Exact solver for the optimal expected score of a thirteen-category,
//! five-dice scoring game under perfect play (no Joker rule, no Yahtzee
//! bonus). Computes the full value table by backward induction over packed
//! game states, then answers point queries against it.

pub mod combinatorics;
pub(crate) mod kernel;
pub mod solver;
pub mod state;
pub mod tables;
pub mod tensor;
pub mod types;
pub mod yahtzee;

pub use solver::{build_solver, Action, BuildOptions, Solver};
pub use state::State;
pub use types::{KeepCounts, RollCounts, ScoreCategory};
