use enum_map::Enum;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollCounts([u8; RollCounts::NUM_FACES]);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KeepCounts([u8; RollCounts::NUM_FACES]);

/// One of the thirteen scoring slots. Declaration order fixes the category
/// code used throughout the state encoding: `Ones` is code 0, `Chance` is
/// code 12.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Enum, EnumIter)]
pub enum ScoreCategory {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

#[derive(Debug, Eq, PartialEq)]
pub enum ConstructionError {
    ValueTooLarge { max: u8, got: u8 },
    SumMismatch { expected: u8, got: u8 },
}

#[derive(Debug, Eq, PartialEq)]
pub enum SubtractionError {
    Underflow { index: u8 },
}

impl ScoreCategory {
    pub const COUNT: usize = 13;

    pub fn code(self) -> u8 {
        match self {
            ScoreCategory::Ones => 0,
            ScoreCategory::Twos => 1,
            ScoreCategory::Threes => 2,
            ScoreCategory::Fours => 3,
            ScoreCategory::Fives => 4,
            ScoreCategory::Sixes => 5,
            ScoreCategory::ThreeOfAKind => 6,
            ScoreCategory::FourOfAKind => 7,
            ScoreCategory::FullHouse => 8,
            ScoreCategory::SmallStraight => 9,
            ScoreCategory::LargeStraight => 10,
            ScoreCategory::Yahtzee => 11,
            ScoreCategory::Chance => 12,
        }
    }

    pub fn is_upper_section(&self) -> bool {
        matches!(
            self,
            ScoreCategory::Ones
                | ScoreCategory::Twos
                | ScoreCategory::Threes
                | ScoreCategory::Fours
                | ScoreCategory::Fives
                | ScoreCategory::Sixes
        )
    }

    pub fn is_lower_section(&self) -> bool {
        !self.is_upper_section()
    }
}

impl RollCounts {
    pub const NUM_DICE: usize = 5;
    pub const NUM_FACES: usize = 6;

    pub fn roll_counts(&self) -> &[u8; Self::NUM_FACES] {
        &self.0
    }

    /// Counts still to be rerolled after `keep_counts` is held back, i.e.
    /// `self - keep_counts` face by face.
    pub fn subtract(&self, keep_counts: &KeepCounts) -> Result<KeepCounts, SubtractionError> {
        let mut result = *self.roll_counts();
        for i in 0..RollCounts::NUM_FACES {
            if result[i] < keep_counts.keep_counts()[i] {
                return Err(SubtractionError::Underflow { index: i as u8 });
            }
            result[i] -= keep_counts.keep_counts()[i];
        }
        Ok(KeepCounts::try_from(result).unwrap())
    }
}

impl TryFrom<[u8; RollCounts::NUM_FACES]> for RollCounts {
    type Error = ConstructionError;

    fn try_from(value: [u8; Self::NUM_FACES]) -> Result<Self, Self::Error> {
        if value.iter().any(|&x| x > Self::NUM_DICE as u8) {
            Err(Self::Error::ValueTooLarge {
                max: Self::NUM_DICE as u8,
                got: *value.iter().find(|&&x| x > Self::NUM_DICE as u8).unwrap(),
            })
        } else if value.iter().sum::<u8>() != Self::NUM_DICE as u8 {
            Err(Self::Error::SumMismatch {
                expected: Self::NUM_DICE as u8,
                got: value.iter().sum::<u8>(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl KeepCounts {
    pub fn keep_counts(&self) -> &[u8; RollCounts::NUM_FACES] {
        &self.0
    }
}

impl TryFrom<[u8; RollCounts::NUM_FACES]> for KeepCounts {
    type Error = ConstructionError;

    fn try_from(value: [u8; RollCounts::NUM_FACES]) -> Result<Self, Self::Error> {
        if value.iter().any(|&x| x > RollCounts::NUM_DICE as u8) {
            Err(Self::Error::ValueTooLarge {
                max: RollCounts::NUM_DICE as u8,
                got: *value
                    .iter()
                    .find(|&&x| x > RollCounts::NUM_DICE as u8)
                    .unwrap(),
            })
        } else if value.iter().sum::<u8>() > RollCounts::NUM_DICE as u8 {
            Err(Self::Error::SumMismatch {
                expected: RollCounts::NUM_DICE as u8,
                got: value.iter().sum::<u8>(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_counts_valid_initialisation() {
        let result = RollCounts::try_from([1, 0, 3, 1, 0, 0]);
        assert!(result.is_ok());
    }

    #[test]
    fn roll_counts_invalid_initialisation() {
        let result = RollCounts::try_from([1, 1, 1, 1, 1, 1]);
        assert_eq!(
            result,
            Err(ConstructionError::SumMismatch {
                expected: RollCounts::NUM_DICE as u8,
                got: 6
            })
        );
    }

    #[test]
    fn roll_counts_initialisation_overflow() {
        let result = RollCounts::try_from([254, 3, 4, 0, 0, 0]);
        assert_eq!(
            result,
            Err(ConstructionError::ValueTooLarge {
                max: RollCounts::NUM_DICE as u8,
                got: 254
            })
        );
    }

    #[test]
    fn keep_counts_valid_initialisation() {
        let result = KeepCounts::try_from([1, 0, 3, 1, 0, 0]);
        assert!(result.is_ok());
    }

    #[test]
    fn keep_counts_invalid_initialisation() {
        let result = KeepCounts::try_from([1, 1, 1, 1, 1, 1]);
        assert_eq!(
            result,
            Err(ConstructionError::SumMismatch {
                expected: RollCounts::NUM_DICE as u8,
                got: 6
            })
        );
    }

    #[test]
    fn subtract_underflow() {
        let roll = RollCounts::try_from([1, 0, 0, 0, 0, 4]).unwrap();
        let keep = KeepCounts::try_from([0, 0, 0, 0, 0, 5]).unwrap();
        assert_eq!(
            roll.subtract(&keep),
            Err(SubtractionError::Underflow { index: 5 })
        );
    }

    #[test]
    fn category_codes_match_declaration_order() {
        for (i, cat) in ScoreCategory::iter().enumerate() {
            assert_eq!(cat.code() as usize, i);
        }
    }

    #[test]
    fn category_count_is_thirteen() {
        assert_eq!(ScoreCategory::COUNT, 13);
    }
}
