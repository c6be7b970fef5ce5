//! The five-die hand and its validation boundary.
//!
//! All scoring is total over a [`Hand`]; the only fallible step is building
//! one. Validation happens here exactly once, never per category.

use thiserror::Error;

/// A hand always holds exactly this many dice.
pub const HAND_SIZE: usize = 5;

/// Rejected dice input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidHand {
    #[error("a hand must contain exactly 5 dice, got {count}")]
    WrongCount { count: usize },
    #[error("die face {value} is outside 1..=6")]
    FaceOutOfRange { value: u8 },
}

/// Five die faces, each in 1..=6. Order is irrelevant to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    dice: [u8; HAND_SIZE],
}

impl Hand {
    /// Validate and wrap raw dice values.
    pub fn new(values: &[u8]) -> Result<Self, InvalidHand> {
        let dice: [u8; HAND_SIZE] = values
            .try_into()
            .map_err(|_| InvalidHand::WrongCount {
                count: values.len(),
            })?;
        for &d in &dice {
            if !(1..=6).contains(&d) {
                return Err(InvalidHand::FaceOutOfRange { value: d });
            }
        }
        Ok(Self { dice })
    }

    pub fn dice(&self) -> [u8; HAND_SIZE] {
        self.dice
    }

    /// Per-face tally: `counts[f - 1]` is the number of dice showing face `f`.
    pub fn face_counts(&self) -> [u8; 6] {
        let mut counts = [0u8; 6];
        for &d in &self.dice {
            counts[(d - 1) as usize] += 1;
        }
        counts
    }

    /// Sum of all five faces (5..=30).
    pub fn sum(&self) -> u32 {
        self.dice.iter().map(|&d| u32::from(d)).sum()
    }
}

impl TryFrom<[u8; HAND_SIZE]> for Hand {
    type Error = InvalidHand;

    fn try_from(dice: [u8; HAND_SIZE]) -> Result<Self, InvalidHand> {
        Self::new(&dice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_five_faces_in_range() {
        let h = Hand::new(&[1, 6, 3, 2, 4]).unwrap();
        assert_eq!(h.dice(), [1, 6, 3, 2, 4]);
        assert_eq!(h.sum(), 16);
    }

    #[test]
    fn face_counts_bucket_by_face() {
        let h = Hand::new(&[2, 2, 2, 5, 6]).unwrap();
        assert_eq!(h.face_counts(), [0, 3, 0, 0, 1, 1]);
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(Hand::new(&[]), Err(InvalidHand::WrongCount { count: 0 }));
        assert_eq!(
            Hand::new(&[1, 2, 3, 4]),
            Err(InvalidHand::WrongCount { count: 4 })
        );
        assert_eq!(
            Hand::new(&[1, 2, 3, 4, 5, 6]),
            Err(InvalidHand::WrongCount { count: 6 })
        );
    }

    #[test]
    fn rejects_out_of_range_faces() {
        assert_eq!(
            Hand::new(&[0, 2, 3, 4, 5]),
            Err(InvalidHand::FaceOutOfRange { value: 0 })
        );
        assert_eq!(
            Hand::new(&[1, 2, 3, 4, 7]),
            Err(InvalidHand::FaceOutOfRange { value: 7 })
        );
    }

    #[test]
    fn try_from_array_goes_through_validation() {
        assert!(Hand::try_from([1, 1, 1, 1, 1]).is_ok());
        assert_eq!(
            Hand::try_from([1, 1, 1, 1, 9]),
            Err(InvalidHand::FaceOutOfRange { value: 9 })
        );
    }
}
