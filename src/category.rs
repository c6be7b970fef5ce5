//! The closed set of 13 scorecard categories.
//!
//! Index order is upper section first (Ones..Sixes), then the seven lower
//! combination categories. Collections keyed by [`CategoryKind`] use
//! `enum_map`, so there is no integer-index arithmetic anywhere.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Number of scorecard categories (6 upper + 7 lower).
pub const NUM_CATS: usize = 13;

/// One of the 13 scoring slots on a Yahtzee scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
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
    Chance,
    Yahtzee,
}

impl CategoryKind {
    /// All categories in canonical scorecard order.
    pub const ALL: [CategoryKind; NUM_CATS] = [
        CategoryKind::Ones,
        CategoryKind::Twos,
        CategoryKind::Threes,
        CategoryKind::Fours,
        CategoryKind::Fives,
        CategoryKind::Sixes,
        CategoryKind::ThreeOfAKind,
        CategoryKind::FourOfAKind,
        CategoryKind::FullHouse,
        CategoryKind::SmallStraight,
        CategoryKind::LargeStraight,
        CategoryKind::Chance,
        CategoryKind::Yahtzee,
    ];

    /// Stable snake_case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            CategoryKind::Ones => "ones",
            CategoryKind::Twos => "twos",
            CategoryKind::Threes => "threes",
            CategoryKind::Fours => "fours",
            CategoryKind::Fives => "fives",
            CategoryKind::Sixes => "sixes",
            CategoryKind::ThreeOfAKind => "three_of_a_kind",
            CategoryKind::FourOfAKind => "four_of_a_kind",
            CategoryKind::FullHouse => "full_house",
            CategoryKind::SmallStraight => "small_straight",
            CategoryKind::LargeStraight => "large_straight",
            CategoryKind::Chance => "chance",
            CategoryKind::Yahtzee => "yahtzee",
        }
    }

    /// The face value an upper-section category counts, if any.
    pub fn upper_face(self) -> Option<u8> {
        match self {
            CategoryKind::Ones => Some(1),
            CategoryKind::Twos => Some(2),
            CategoryKind::Threes => Some(3),
            CategoryKind::Fours => Some(4),
            CategoryKind::Fives => Some(5),
            CategoryKind::Sixes => Some(6),
            _ => None,
        }
    }

    pub fn is_upper(self) -> bool {
        self.upper_face().is_some()
    }
}
