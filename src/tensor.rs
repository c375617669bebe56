use crate::combinatorics::{DISTINCT_KEEPS, DISTINCT_ROLL_COUNTS};
use crate::types::{KeepCounts, RollCounts};

/// Radix-6 index for a keep-count vector (each of the 6 faces can be kept
/// `0..=5` times). Dense but simple: `6^6` slots, the overwhelming majority
/// unused (a hold can never keep more than 5 dice total).
const KEEP_SLOTS: usize = 6usize.pow(RollCounts::NUM_FACES as u32);

fn keep_slot(keep: &KeepCounts) -> usize {
    keep.keep_counts()
        .iter()
        .fold(0usize, |acc, &c| acc * 6 + c as usize)
}

/// The reroll transition kernel (component D) and the initial-throw weight
/// vector (component E).
///
/// Rather than store all 32 position-masks per hand (most of which collapse
/// to an identical row, since the transition only depends on the multiset of
/// kept pips — spec.md 4.D), holds are keyed by `KeepCounts`: the multiset of
/// pips kept. `roll_probs(keep)` is the row `P[h, ·]` for any hand that keep
/// is a sub-multiset of; it does not depend on which hand the keep came from.
pub struct Tensors {
    roll_probs: Vec<Vec<(usize, f64)>>,
    pub w: [f64; DISTINCT_ROLL_COUNTS],
}

impl Tensors {
    pub fn build() -> Self {
        let mut roll_probs = vec![Vec::new(); KEEP_SLOTS];
        for raw_keep in DISTINCT_KEEPS {
            let keep = KeepCounts::try_from(raw_keep)
                .expect("DISTINCT_KEEPS only ever contains valid keep-count vectors.");
            let mut row = Vec::new();
            for target_index in 0..DISTINCT_ROLL_COUNTS {
                let target = RollCounts::hand_of_index(target_index);
                let p = target.p_roll_given_keep(&keep);
                if p > 0.0 {
                    row.push((target_index, p));
                }
            }
            roll_probs[keep_slot(&keep)] = row;
        }

        let mut w = [0.0f64; DISTINCT_ROLL_COUNTS];
        for index in 0..DISTINCT_ROLL_COUNTS {
            w[index] = RollCounts::hand_of_index(index).p_roll();
        }

        Tensors { roll_probs, w }
    }

    /// `P[keep, ·]`: the target-hand index and probability of every outcome
    /// reachable by keeping `keep` and rerolling the rest.
    pub fn roll_probs(&self, keep: &KeepCounts) -> &[(usize, f64)] {
        &self.roll_probs[keep_slot(keep)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorics::DISTINCT_ROLLS;

    #[test]
    fn every_row_sums_to_one() {
        let tensors = Tensors::build();
        for raw_hand in DISTINCT_ROLLS {
            let hand = RollCounts::try_from(raw_hand).unwrap();
            for keep in hand.valid_keep_counts() {
                let total: f64 = tensors
                    .roll_probs(&keep)
                    .iter()
                    .map(|&(_, p)| p)
                    .sum();
                assert!(
                    (total - 1.0).abs() < 1e-12,
                    "row for hand {:?} keep {:?} sums to {total}",
                    hand,
                    keep
                );
            }
        }
    }

    #[test]
    fn w_sums_to_one() {
        let tensors = Tensors::build();
        let total: f64 = tensors.w.iter().sum();
        assert!((total - 1.0).abs() < 1e-12, "w sums to {total}");
    }

    #[test]
    fn w_matches_hold_none_row_for_every_hand() {
        let tensors = Tensors::build();
        let keep_nothing = KeepCounts::try_from([0, 0, 0, 0, 0, 0]).unwrap();
        let hold_none_row = tensors.roll_probs(&keep_nothing);
        let mut from_row = [0.0f64; DISTINCT_ROLL_COUNTS];
        for &(index, p) in hold_none_row {
            from_row[index] = p;
        }
        for (index, &w) in tensors.w.iter().enumerate() {
            assert!(
                (w - from_row[index]).abs() < 1e-12,
                "w[{index}] = {w} but hold-none row gives {}",
                from_row[index]
            );
        }
    }

    #[test]
    fn keeping_all_five_dice_is_certain() {
        let tensors = Tensors::build();
        let hand = RollCounts::from_dice([3, 3, 3, 5, 5]);
        let keep_all = KeepCounts::try_from(*hand.roll_counts()).unwrap();
        let row = tensors.roll_probs(&keep_all);
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].0, hand.index_of_sorted_hand());
        assert!((row[0].1 - 1.0).abs() < 1e-12);
    }
}
