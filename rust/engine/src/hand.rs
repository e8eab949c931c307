use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Three cards played together in one showdown round.
pub type CardSet = [Card; 3];

/// A player's full submission: five sets, played in rounds 1 through 5.
pub type FiveSets = [CardSet; 5];

const TRIO: f64 = 8000.0;
const PURE_RAMJI: f64 = 7000.0;
const PURE_STRAIGHT: f64 = 6000.0;
const RAMJI: f64 = 5000.0;
const STRAIGHT: f64 = 4000.0;
const FLUSH: f64 = 3000.0;
const PAIR: f64 = 2000.0;
const HIGH_CARD: f64 = 1000.0;

/// A-2-3 sits between a king-high and an ace-high straight.
const LOW_STRAIGHT_TIEBREAK: f64 = 13.5;

/// Pattern tiers of a three-card set, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum SetCategory {
    HighCard,
    Pair,
    Flush,
    Straight,
    Ramji,
    PureStraight,
    PureRamji,
    Trio,
}

/// Strength of a three-card set. Tiers sit 1000 apart and no tiebreak
/// reaches 1000, so comparing scores compares categories first.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetScore(f64);

impl SetScore {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn category(self) -> SetCategory {
        match self.0 {
            v if v >= TRIO => SetCategory::Trio,
            v if v >= PURE_RAMJI => SetCategory::PureRamji,
            v if v >= PURE_STRAIGHT => SetCategory::PureStraight,
            v if v >= RAMJI => SetCategory::Ramji,
            v if v >= STRAIGHT => SetCategory::Straight,
            v if v >= FLUSH => SetCategory::Flush,
            v if v >= PAIR => SetCategory::Pair,
            _ => SetCategory::HighCard,
        }
    }

    /// True for a 2-3-5, suited or not.
    pub fn is_ramji(self) -> bool {
        (PURE_RAMJI..TRIO).contains(&self.0) || (RAMJI..PURE_STRAIGHT).contains(&self.0)
    }
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scores a three-card set.
///
/// Tiers, strongest first:
///
/// | Pattern                   | Score                  |
/// |---------------------------|------------------------|
/// | Trio                      | 8000 + rank            |
/// | 2-3-5 suited              | 7000                   |
/// | Straight, suited          | 6000 + high            |
/// | 2-3-5 mixed               | 5000                   |
/// | Straight, mixed           | 4000 + high            |
/// | Flush                     | 3000 + high            |
/// | Pair                      | 2000 + paired rank     |
/// | High card                 | 1000 + high            |
///
/// A-2-3 counts as a straight whose "high" is 13.5.
///
/// # Examples
///
/// ```
/// use afghound_engine::cards::{Card, Rank, Suit};
/// use afghound_engine::hand::evaluate_set;
///
/// let set = [
///     Card::new(Rank::Four, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Clubs),
///     Card::new(Rank::Six, Suit::Clubs),
/// ];
/// assert_eq!(evaluate_set(&set).value(), 6006.0);
/// ```
pub fn evaluate_set(set: &CardSet) -> SetScore {
    let mut sorted = *set;
    sorted.sort_by_key(|c| c.rank);
    let [r1, r2, r3] = sorted.map(|c| c.rank.value());
    let pure = sorted[0].suit == sorted[1].suit && sorted[1].suit == sorted[2].suit;

    if r1 == r2 && r2 == r3 {
        return SetScore(TRIO + f64::from(r1));
    }
    if (r1, r2, r3) == (2, 3, 5) {
        return SetScore(if pure { PURE_RAMJI } else { RAMJI });
    }

    let low_straight = (r1, r2, r3) == (2, 3, Rank::Ace.value());
    let straight = r2 == r1 + 1 && r3 == r2 + 1;
    if low_straight || straight {
        let base = if pure { PURE_STRAIGHT } else { STRAIGHT };
        let tiebreak = if low_straight {
            LOW_STRAIGHT_TIEBREAK
        } else {
            f64::from(r3)
        };
        return SetScore(base + tiebreak);
    }

    if pure {
        return SetScore(FLUSH + f64::from(r3));
    }
    if r1 == r2 || r2 == r3 {
        return SetScore(PAIR + f64::from(r2));
    }
    SetScore(HIGH_CARD + f64::from(r3))
}

/// Scores a slice that should hold exactly three cards.
pub fn score_set(cards: &[Card]) -> Result<SetScore, GameError> {
    let set: &CardSet = cards
        .try_into()
        .map_err(|_| GameError::InvalidSetSize { len: cards.len() })?;
    Ok(evaluate_set(set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn low_straight_keeps_fractional_tiebreak() {
        let set = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Three, Suit::Diamonds),
        ];
        let score = evaluate_set(&set);
        assert_eq!(score.value(), 4013.5);
        assert_eq!(score.to_string(), "4013.5");
        assert_eq!(score.category(), SetCategory::Straight);
    }

    #[test]
    fn score_set_rejects_wrong_sizes() {
        let two = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        assert_eq!(
            score_set(&two),
            Err(GameError::InvalidSetSize { len: 2 })
        );
        assert!(matches!(
            score_set(&[]),
            Err(GameError::InvalidSetSize { len: 0 })
        ));
    }

    #[test]
    fn ramji_detection_covers_both_tiers() {
        assert!(SetScore(7000.0).is_ramji());
        assert!(SetScore(5000.0).is_ramji());
        assert!(!SetScore(6014.0).is_ramji());
        assert!(!SetScore(8002.0).is_ramji());
        assert!(!SetScore(4013.5).is_ramji());
    }
}
