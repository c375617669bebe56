use crate::combinatorics::DISTINCT_ROLL_COUNTS;
use crate::types::{RollCounts, ScoreCategory};
use crate::yahtzee;
use strum::IntoEnumIterator;

/// Dense `252 x 13` roll-score matrices (component C): `s[hand][cat]` and
/// `u[hand][cat]`, built once from the pure scoring function in `yahtzee`.
pub struct Tables {
    pub s: [[u32; ScoreCategory::COUNT]; DISTINCT_ROLL_COUNTS],
    pub u: [[u32; ScoreCategory::COUNT]; DISTINCT_ROLL_COUNTS],
}

impl Tables {
    pub fn build() -> Self {
        let mut s = [[0u32; ScoreCategory::COUNT]; DISTINCT_ROLL_COUNTS];
        let mut u = [[0u32; ScoreCategory::COUNT]; DISTINCT_ROLL_COUNTS];
        for index in 0..DISTINCT_ROLL_COUNTS {
            let hand = RollCounts::hand_of_index(index);
            for category in ScoreCategory::iter() {
                let code = category.code() as usize;
                s[index][code] = yahtzee::score(&hand, category);
                u[index][code] = yahtzee::upper_contrib(&hand, category);
            }
        }
        Tables { s, u }
    }
}
