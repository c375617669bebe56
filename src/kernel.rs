use crate::combinatorics::DISTINCT_ROLL_COUNTS;
use crate::state::{State, UPPER_CAP};
use crate::tables::Tables;
use crate::tensor::Tensors;
use crate::types::{KeepCounts, RollCounts, ScoreCategory};
use strum::IntoEnumIterator;

const UPPER_BONUS: f64 = 35.0;

/// Best-category selection (component G): the open category maximising
/// immediate score + upper bonus (if crossed) + downstream value, and the
/// value itself. Ties broken by ascending category code.
pub(crate) fn best_category(
    hand_index: usize,
    state: State,
    v: &[f64],
    tables: &Tables,
) -> (ScoreCategory, f64) {
    let mut best: Option<(ScoreCategory, f64)> = None;
    for category in ScoreCategory::iter() {
        if !state.is_open(category) {
            continue;
        }
        let code = category.code() as usize;
        let old_upper = state.upper();
        let new_upper = (old_upper + tables.u[hand_index][code]).min(UPPER_CAP);
        let bonus = if new_upper >= UPPER_CAP && old_upper < UPPER_CAP {
            UPPER_BONUS
        } else {
            0.0
        };
        let next_state = state.close(category, new_upper);
        let value = tables.s[hand_index][code] as f64 + bonus + v[next_state.raw() as usize];
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((category, value));
        }
    }
    best.expect("best_category is only called on states with at least one open category")
}

/// `B[r]` for every hand `r`: the expected total if forced to score
/// immediately after observing `r`, given `state`.
pub(crate) fn compute_b(
    state: State,
    v: &[f64],
    tables: &Tables,
) -> [f64; DISTINCT_ROLL_COUNTS] {
    let mut b = [0.0; DISTINCT_ROLL_COUNTS];
    for (hand_index, slot) in b.iter_mut().enumerate() {
        *slot = best_category(hand_index, state, v, tables).1;
    }
    b
}

/// `T(v)[r] = max_h Σ_s P[h, r, s] · v[s]`, plus the maximising hold. The
/// all-keep hold is always present in `valid_keep_counts`, so this is always
/// `Some` and `T(v)[r] >= v[r]` (monotonicity under reroll, spec.md 4.H).
pub(crate) fn contract_with_arg(
    tensors: &Tensors,
    hand_index: usize,
    v: &[f64; DISTINCT_ROLL_COUNTS],
) -> (KeepCounts, f64) {
    let hand = RollCounts::hand_of_index(hand_index);
    let mut best: Option<(KeepCounts, f64)> = None;
    for keep in hand.valid_keep_counts() {
        let value: f64 = tensors
            .roll_probs(&keep)
            .iter()
            .map(|&(target, p)| p * v[target])
            .sum();
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((keep, value));
        }
    }
    best.expect("keeping every die is always a valid hold")
}

/// `T(v)` applied to every hand at once (used for both reroll phases in
/// component H — `C = T(B)`, `D = T(C)`).
pub(crate) fn compute_c(
    tensors: &Tensors,
    v: &[f64; DISTINCT_ROLL_COUNTS],
) -> [f64; DISTINCT_ROLL_COUNTS] {
    let mut c = [0.0; DISTINCT_ROLL_COUNTS];
    for (hand_index, slot) in c.iter_mut().enumerate() {
        *slot = contract_with_arg(tensors, hand_index, v).1;
    }
    c
}

/// The per-state value kernel (component H): one throw, two optional
/// rerolls, thirteen categories, upper bonus. `v` must already hold every
/// entry with strictly lower `popcount(open)`.
pub(crate) fn value_for_state(state: State, tables: &Tables, tensors: &Tensors, v: &[f64]) -> f64 {
    if state.open_mask() == 0 {
        return if state.upper() >= UPPER_CAP {
            UPPER_BONUS
        } else {
            0.0
        };
    }
    let b = compute_b(state, v, tables);
    let c = compute_c(tensors, &b);
    let d = compute_c(tensors, &c);
    (0..DISTINCT_ROLL_COUNTS).map(|r| tensors.w[r] * d[r]).sum()
}
