//! yahtzee-core: scoring rules, category model, and scorecard state for a
//! Yahtzee round.
//!
//! Callers roll dice and own all presentation; this crate owns the mapping
//! from a five-die hand to category scores and the claim-once scorecard
//! bookkeeping. A typical turn: build a [`Hand`], preview open categories
//! with [`ScoreCard::possible_scores`], then [`ScoreCard::claim`] one.

pub mod category;
pub mod config;
pub mod events;
pub mod hand;
pub mod scorecard;
pub mod scoring;

pub use category::{CategoryKind, NUM_CATS};
pub use config::{ConfigError, Rules};
pub use events::{ClaimEventV1, GameLogError, GameLogWriter, ResetEventV1};
pub use hand::{Hand, InvalidHand, HAND_SIZE};
pub use scorecard::{Category, ScoreCard};
pub use scoring::{score, score_dice, score_with_rules, scores_for_hand};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
