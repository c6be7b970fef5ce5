//! Scorecard state: one claim-once slot per category.
//!
//! Each slot is either unclaimed or claimed; a claim freezes its score until
//! a whole-card reset. Re-claiming a used category is a defined no-op, not an
//! error: the first score stands and the card is unchanged.

use crate::category::CategoryKind;
use crate::hand::Hand;
use crate::scoring;
use enum_map::{enum_map, EnumMap};

/// One scorecard slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub kind: CategoryKind,
    pub score: u32,
    pub claimed: bool,
}

impl Category {
    fn unclaimed(kind: CategoryKind) -> Self {
        Self {
            kind,
            score: 0,
            claimed: false,
        }
    }
}

/// A full 13-category scorecard with a running total.
///
/// Single-writer: the card mutates only its own slots and does nothing to
/// make `claim` atomic against concurrent callers.
#[derive(Debug, Clone)]
pub struct ScoreCard {
    slots: EnumMap<CategoryKind, Category>,
    total: u32,
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCard {
    /// Fresh card: all 13 categories unclaimed with score 0.
    pub fn new() -> Self {
        Self {
            slots: enum_map! { kind => Category::unclaimed(kind) },
            total: 0,
        }
    }

    /// Claim a category with a score, marking it used and updating the total.
    ///
    /// If `kind` is already claimed the call does nothing; the stored score
    /// is never overwritten.
    pub fn claim(&mut self, kind: CategoryKind, score: u32) {
        let slot = &mut self.slots[kind];
        if slot.claimed {
            return;
        }
        slot.score = score;
        slot.claimed = true;
        self.total = self.recompute_total();
    }

    pub fn is_used(&self, kind: CategoryKind) -> bool {
        self.slots[kind].claimed
    }

    /// Sum of all claimed scores; unclaimed categories contribute 0.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Claimed score over the upper section (Ones..Sixes).
    pub fn upper_total(&self) -> u32 {
        self.claimed_sum(|c| c.kind.is_upper())
    }

    /// Claimed score over the seven lower combination categories.
    pub fn lower_total(&self) -> u32 {
        self.claimed_sum(|c| !c.kind.is_upper())
    }

    /// Return every category to unclaimed/score-0 for a new game.
    pub fn reset(&mut self) {
        self.slots = enum_map! { kind => Category::unclaimed(kind) };
        self.total = 0;
    }

    /// Look up one category's slot. Total over the closed enum.
    pub fn category(&self, kind: CategoryKind) -> &Category {
        &self.slots[kind]
    }

    /// The 13 categories in canonical scorecard order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.slots.values()
    }

    /// True once every category has been claimed.
    pub fn is_complete(&self) -> bool {
        self.slots.values().all(|c| c.claimed)
    }

    /// Preview: what each still-open category would score for this hand.
    pub fn possible_scores(&self, hand: &Hand) -> Vec<(CategoryKind, u32)> {
        let all = scoring::scores_for_hand(hand);
        CategoryKind::ALL
            .iter()
            .filter(|&&kind| !self.is_used(kind))
            .map(|&kind| (kind, all[kind]))
            .collect()
    }

    fn claimed_sum(&self, pred: impl Fn(&Category) -> bool) -> u32 {
        self.slots
            .values()
            .filter(|&c| c.claimed && pred(c))
            .map(|c| c.score)
            .sum()
    }

    fn recompute_total(&self) -> u32 {
        self.slots
            .values()
            .filter(|c| c.claimed)
            .map(|c| c.score)
            .sum()
    }
}
