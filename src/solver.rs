use crate::kernel::{best_category, compute_b, compute_c, contract_with_arg, value_for_state};
use crate::state::{self, State, FRESH_STATE, TOTAL_STATES};
use crate::tables::Tables;
use crate::tensor::Tensors;
use crate::types::{KeepCounts, RollCounts, ScoreCategory};
use rayon::prelude::*;
use std::sync::OnceLock;
use tracing::info;

/// Knobs for `Solver::new`, matching spec.md §6's three build-time switches
/// plus a parallelism toggle.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Construct `S`/`U` (component C). Default `true`.
    pub build_roll_table: bool,
    /// Construct `P`/`w` (components D, E). Default `true`.
    pub build_tensors: bool,
    /// Run the full DP immediately in `Solver::new` rather than lazily on
    /// first query. Default `false`.
    pub evaluate: bool,
    /// Run the DP on the Rayon global pool instead of sequentially.
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            build_roll_table: true,
            build_tensors: true,
            evaluate: false,
            parallel: false,
        }
    }
}

impl BuildOptions {
    pub fn sequential() -> Self {
        BuildOptions {
            parallel: false,
            ..Default::default()
        }
    }

    pub fn parallel() -> Self {
        BuildOptions {
            parallel: true,
            ..Default::default()
        }
    }
}

/// What to do with a turn's first throw: either keep rerolling (`Reroll`,
/// naming the dice to hold) or stop and score a category (`Score`).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    Reroll(KeepCounts),
    Score(ScoreCategory),
}

/// Exact solver for the optimal-expected-score game (component I). Built
/// once, queried many times; unless `options.evaluate` requests it up front,
/// the whole value table is computed lazily on first query, since the DP's
/// level-by-level dependency structure makes a full solve barely more
/// expensive than a partial one.
pub struct Solver {
    tables: Option<Tables>,
    tensors: Option<Tensors>,
    v: OnceLock<Vec<f64>>,
    options: BuildOptions,
}

impl Solver {
    pub fn new(options: BuildOptions) -> Self {
        let solver = Solver {
            tables: options.build_roll_table.then(Tables::build),
            tensors: options.build_tensors.then(Tensors::build),
            v: OnceLock::new(),
            options,
        };
        if options.evaluate {
            solver.value_table();
        }
        solver
    }

    fn value_table(&self) -> &Vec<f64> {
        self.v.get_or_init(|| {
            let tables = self
                .tables
                .as_ref()
                .expect("Solver::value requires BuildOptions::build_roll_table");
            let tensors = self
                .tensors
                .as_ref()
                .expect("Solver::value requires BuildOptions::build_tensors");
            run_dp(tables, tensors, self.options)
        })
    }

    /// `V[state]`: the expected final score of perfect play starting from
    /// `state`'s open categories and capped upper total, before any dice are
    /// thrown.
    pub fn value(&self, state: State) -> f64 {
        self.value_table()[state.raw() as usize]
    }

    /// `V[FRESH_STATE]`: the expected score of an entire new game.
    pub fn expected_score(&self) -> f64 {
        self.value(State::from_raw(FRESH_STATE))
    }

    /// The optimal action in `state` having just thrown `hand`, with
    /// `rerolls_remaining` more throws available (0, 1, or 2) before the
    /// category must be scored.
    pub fn best_action(&self, state: State, hand: &RollCounts, rerolls_remaining: u8) -> Action {
        debug_assert!(rerolls_remaining <= 2, "at most two rerolls exist per turn");
        let v = self.value_table();
        let tables = self
            .tables
            .as_ref()
            .expect("Solver::best_action requires BuildOptions::build_roll_table");
        let tensors = self
            .tensors
            .as_ref()
            .expect("Solver::best_action requires BuildOptions::build_tensors");
        let hand_index = hand.index_of_sorted_hand();
        let (category, score_value) = best_category(hand_index, state, v, tables);

        if rerolls_remaining == 0 {
            return Action::Score(category);
        }

        let b = compute_b(state, v, tables);
        let downstream = if rerolls_remaining == 1 {
            b
        } else {
            compute_c(tensors, &b)
        };
        let (keep, reroll_value) = contract_with_arg(tensors, hand_index, &downstream);

        if reroll_value > score_value {
            Action::Reroll(keep)
        } else {
            Action::Score(category)
        }
    }
}

fn run_dp(tables: &Tables, tensors: &Tensors, options: BuildOptions) -> Vec<f64> {
    let mut v = vec![0.0f64; TOTAL_STATES];
    let levels = state::states_by_level();
    for (level, states_in_level) in levels.iter().enumerate() {
        info!(level, count = states_in_level.len(), "solving DP level");
        if options.parallel {
            let values: Vec<f64> = states_in_level
                .par_iter()
                .map(|&raw| value_for_state(State::from_raw(raw), tables, tensors, &v))
                .collect();
            for (&raw, value) in states_in_level.iter().zip(values) {
                v[raw as usize] = value;
            }
        } else {
            for &raw in states_in_level {
                v[raw as usize] = value_for_state(State::from_raw(raw), tables, tensors, &v);
            }
        }
    }
    v
}

/// Convenience constructor matching the external-interface vocabulary.
pub fn build_solver(options: BuildOptions) -> Solver {
    Solver::new(options)
}
