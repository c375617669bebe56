use crate::types::ScoreCategory;

/// Number of bits given to the open-categories mask.
pub const OPEN_MASK_BITS: u32 = 13;
/// All thirteen categories open, as a bitmask.
pub const FULL_OPEN_MASK: u32 = (1 << OPEN_MASK_BITS) - 1;
/// The capped upper-section total saturates here; the bonus is credited once
/// this is reached.
pub const UPPER_CAP: u32 = 63;
/// Size of the dense `V` table: every 19-bit integer, reachable or not.
pub const TOTAL_STATES: usize = 1 << 19;
/// `V[FRESH_STATE]` is the expected score of a brand new game.
pub const FRESH_STATE: u32 = FULL_OPEN_MASK;

/// A packed game state: `(capped_upper_total << 13) | open_categories_mask`
/// (component F). Cheap to copy, cheap to use as an array index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct State(u32);

impl State {
    pub fn pack(upper: u32, open_mask: u32) -> Self {
        debug_assert!(upper <= UPPER_CAP, "upper {upper} exceeds the cap");
        debug_assert!(
            open_mask <= FULL_OPEN_MASK,
            "open_mask {open_mask} has bits set above bit 12"
        );
        State((upper << OPEN_MASK_BITS) | open_mask)
    }

    pub fn from_raw(raw: u32) -> Self {
        debug_assert!(
            (raw as usize) < TOTAL_STATES,
            "state {raw} has bits set above bit 18"
        );
        State(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn open_mask(self) -> u32 {
        self.0 & FULL_OPEN_MASK
    }

    pub fn upper(self) -> u32 {
        self.0 >> OPEN_MASK_BITS
    }

    pub fn is_open(self, category: ScoreCategory) -> bool {
        (self.open_mask() >> category.code()) & 1 == 1
    }

    /// The state reached by scoring `category` here, bringing the capped
    /// upper total to `new_upper`.
    pub fn close(self, category: ScoreCategory, new_upper: u32) -> State {
        State::pack(new_upper, self.open_mask() & !(1 << category.code()))
    }

    pub fn popcount(self) -> u32 {
        self.open_mask().count_ones()
    }
}

/// All `2^19` states grouped by `popcount(open_mask)`, ascending. Index `k`
/// holds every state with exactly `k` categories still open; the DP driver
/// must fill index 0 before index 1, and so on, since scoring a category
/// strictly decreases its popcount by one.
pub fn states_by_level() -> Vec<Vec<u32>> {
    let mut levels: Vec<Vec<u32>> = vec![Vec::new(); ScoreCategory::COUNT + 1];
    for raw in 0..TOTAL_STATES as u32 {
        let level = (raw & FULL_OPEN_MASK).count_ones() as usize;
        levels[level].push(raw);
    }
    levels
}
