//! Property-based tests for the public solver surface.
//!
//! Cheap properties run on every `cargo test`; properties that require a
//! full DP solve are `#[ignore]`d (run with `cargo test -- --ignored`).

use proptest::prelude::*;
use std::sync::LazyLock;
use yahtzee_solver::tables::Tables;
use yahtzee_solver::{build_solver, BuildOptions, RollCounts, ScoreCategory, Solver, State};

static SOLVER: LazyLock<Solver> = LazyLock::new(|| build_solver(BuildOptions::parallel()));
static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

fn arbitrary_dice() -> impl Strategy<Value = [u8; 5]> {
    (1u8..=6, 1u8..=6, 1u8..=6, 1u8..=6, 1u8..=6)
        .prop_map(|(a, b, c, d, e)| [a, b, c, d, e])
}

fn arbitrary_open_mask() -> impl Strategy<Value = u32> {
    1u32..=((1 << ScoreCategory::COUNT) - 1)
}

fn arbitrary_upper() -> impl Strategy<Value = u32> {
    0u32..=63
}

proptest! {
    /// Canonicalising an arbitrary ordered throw and looking its score back
    /// up by index always agrees with scoring it directly.
    #[test]
    fn prop_hand_round_trip_preserves_scores(dice in arbitrary_dice()) {
        let hand = RollCounts::from_dice(dice);
        let index = hand.index_of_sorted_hand();
        let direct = yahtzee_solver::yahtzee::score(&hand, ScoreCategory::Chance);
        let looked_up = TABLES.s[index][ScoreCategory::Chance.code() as usize];
        prop_assert_eq!(direct, looked_up);
    }

    /// No category ever scores more than a Yahtzee (the single highest-value
    /// category in this ruleset).
    #[test]
    fn prop_no_category_scores_above_fifty(dice in arbitrary_dice()) {
        let hand = RollCounts::from_dice(dice);
        let index = hand.index_of_sorted_hand();
        for &score in &TABLES.s[index] {
            prop_assert!(score <= 50, "score {score} exceeds the maximum possible (Yahtzee = 50)");
        }
    }

    /// Upper-section contribution never exceeds the category's own score.
    #[test]
    fn prop_upper_contrib_never_exceeds_score(dice in arbitrary_dice()) {
        let hand = RollCounts::from_dice(dice);
        let index = hand.index_of_sorted_hand();
        for code in 0..ScoreCategory::COUNT {
            prop_assert!(TABLES.u[index][code] <= TABLES.s[index][code]);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// State values are bounded: never negative, never above a perfect game
    /// (13 Yahtzees is impossible under this ruleset, but a loose bound
    /// keeps the check cheap and robust).
    #[test]
    #[ignore = "forces the full DP to solve"]
    fn prop_state_value_is_bounded(open_mask in arbitrary_open_mask(), upper in arbitrary_upper()) {
        let state = State::pack(upper, open_mask);
        let value = SOLVER.value(state);
        prop_assert!(value >= 0.0, "value {value} is negative");
        prop_assert!(value <= 1000.0, "value {value} is implausibly large");
    }

    /// Having strictly more categories open can never be worth less: the
    /// player is always free to play the extra category for 0.
    #[test]
    #[ignore = "forces the full DP to solve"]
    fn prop_more_open_categories_never_hurts(open_mask in 0u32..((1 << ScoreCategory::COUNT) - 1), upper in arbitrary_upper()) {
        let extra_bit = (!open_mask).trailing_zeros();
        prop_assume!(extra_bit < ScoreCategory::COUNT as u32);
        let fewer = State::pack(upper, open_mask);
        let more = State::pack(upper, open_mask | (1 << extra_bit));
        prop_assert!(SOLVER.value(more) + 1e-9 >= SOLVER.value(fewer));
    }
}
