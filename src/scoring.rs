//! Dice → category scoring.
//!
//! This module is the single place scoring rules live; the scorecard and any
//! preview UI consult it rather than carrying their own copies. Everything
//! here is pure and total over a validated [`Hand`].

use crate::category::CategoryKind;
use crate::config::Rules;
use crate::hand::{Hand, InvalidHand};
use enum_map::{enum_map, EnumMap};

/// Score raw dice values against one category.
///
/// This is the external boundary: it validates the dice (exactly 5, each in
/// 1..=6) and then scores under standard point values.
pub fn score_dice(values: &[u8], kind: CategoryKind) -> Result<u32, InvalidHand> {
    let hand = Hand::new(values)?;
    Ok(score(&hand, kind))
}

/// Score a hand against one category under standard point values.
pub fn score(hand: &Hand, kind: CategoryKind) -> u32 {
    score_with_rules(hand, kind, &Rules::default())
}

/// Score a hand against one category with an explicit point table.
///
/// Only the fixed-value categories (full house, straights, Yahtzee) consult
/// `rules`; counted categories always score from the dice themselves.
pub fn score_with_rules(hand: &Hand, kind: CategoryKind, rules: &Rules) -> u32 {
    let counts = hand.face_counts();
    match kind {
        CategoryKind::Ones => upper_score(&counts, 1),
        CategoryKind::Twos => upper_score(&counts, 2),
        CategoryKind::Threes => upper_score(&counts, 3),
        CategoryKind::Fours => upper_score(&counts, 4),
        CategoryKind::Fives => upper_score(&counts, 5),
        CategoryKind::Sixes => upper_score(&counts, 6),
        CategoryKind::ThreeOfAKind => n_of_a_kind(hand, &counts, 3),
        CategoryKind::FourOfAKind => n_of_a_kind(hand, &counts, 4),
        CategoryKind::FullHouse => {
            if is_full_house(&counts) {
                rules.full_house
            } else {
                0
            }
        }
        CategoryKind::SmallStraight => {
            if has_small_straight(&counts) {
                rules.small_straight
            } else {
                0
            }
        }
        CategoryKind::LargeStraight => {
            if is_large_straight(&counts) {
                rules.large_straight
            } else {
                0
            }
        }
        CategoryKind::Chance => hand.sum(),
        CategoryKind::Yahtzee => {
            if counts.iter().any(|&c| c == 5) {
                rules.yahtzee
            } else {
                0
            }
        }
    }
}

/// All 13 raw category scores for a hand (standard point values).
pub fn scores_for_hand(hand: &Hand) -> EnumMap<CategoryKind, u32> {
    let rules = Rules::default();
    enum_map! { kind => score_with_rules(hand, kind, &rules) }
}

fn upper_score(counts: &[u8; 6], face: u8) -> u32 {
    u32::from(counts[usize::from(face) - 1]) * u32::from(face)
}

fn n_of_a_kind(hand: &Hand, counts: &[u8; 6], n: u8) -> u32 {
    if counts.iter().any(|&c| c >= n) {
        hand.sum()
    } else {
        0
    }
}

// With five dice, a 3-count alongside a 2-count forces the exact {3,2}
// split; five of a kind has no 3-count and does not qualify.
fn is_full_house(counts: &[u8; 6]) -> bool {
    counts.iter().any(|&c| c == 3) && counts.iter().any(|&c| c == 2)
}

fn has_small_straight(counts: &[u8; 6]) -> bool {
    const RUNS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];
    RUNS.iter()
        .any(|run| run.iter().all(|&f| counts[usize::from(f) - 1] > 0))
}

// All five faces of a run present over five dice means each appears exactly
// once, which is the exact distinct-set match.
fn is_large_straight(counts: &[u8; 6]) -> bool {
    const RUNS: [[u8; 5]; 2] = [[1, 2, 3, 4, 5], [2, 3, 4, 5, 6]];
    RUNS.iter()
        .any(|run| run.iter().all(|&f| counts[usize::from(f) - 1] > 0))
}
