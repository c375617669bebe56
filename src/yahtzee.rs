use crate::types::{RollCounts, ScoreCategory};

/// The score awarded for `hand` if scored in `category` (component B). Pure
/// and total: every hand scores *something* in every category, possibly 0.
pub fn score(hand: &RollCounts, category: ScoreCategory) -> u32 {
    use ScoreCategory::*;

    let counts = hand.roll_counts();

    match category {
        Ones => counts[0] as u32,
        Twos => counts[1] as u32 * 2,
        Threes => counts[2] as u32 * 3,
        Fours => counts[3] as u32 * 4,
        Fives => counts[4] as u32 * 5,
        Sixes => counts[5] as u32 * 6,
        ThreeOfAKind => {
            if counts.iter().any(|&x| x >= 3) {
                sum(hand)
            } else {
                0
            }
        }
        FourOfAKind => {
            if counts.iter().any(|&x| x >= 4) {
                sum(hand)
            } else {
                0
            }
        }
        FullHouse => {
            if counts.iter().any(|&x| x == 3) && counts.iter().any(|&x| x == 2) {
                25
            } else {
                0
            }
        }
        SmallStraight => {
            if longest_run(counts) >= 4 {
                30
            } else {
                0
            }
        }
        LargeStraight => {
            if longest_run(counts) >= 5 {
                40
            } else {
                0
            }
        }
        Yahtzee => {
            if counts.iter().any(|&x| x == 5) {
                50
            } else {
                0
            }
        }
        Chance => sum(hand),
    }
}

/// The amount `score(hand, category)` would add to the capped upper total:
/// equal to `score` for upper-section categories, 0 otherwise.
pub fn upper_contrib(hand: &RollCounts, category: ScoreCategory) -> u32 {
    if category.is_upper_section() {
        score(hand, category)
    } else {
        0
    }
}

fn sum(hand: &RollCounts) -> u32 {
    hand.roll_counts()
        .iter()
        .zip(1u32..=RollCounts::NUM_FACES as u32)
        .map(|(&count, face)| count as u32 * face)
        .sum()
}

/// Longest run of consecutive faces with nonzero count, e.g. [1,1,1,1,0,0] -> 4.
fn longest_run(counts: &[u8; RollCounts::NUM_FACES]) -> u8 {
    let mut max_run = 0u8;
    let mut current = 0u8;
    for &count in counts {
        if count > 0 {
            current += 1;
            max_run = max_run.max(current);
        } else {
            current = 0;
        }
    }
    max_run
}
