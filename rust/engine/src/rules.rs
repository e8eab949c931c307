use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::hand::{evaluate_set, CardSet};
use crate::setup::Hands;
use crate::seat::Seat;

/// Bonus value reported for an instant win.
pub const INSTANT_WIN_BONUS: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstantWinReason {
    /// All four Fours.
    QuadFours,
    /// Four of a kind in two different ranks.
    DoubleQuads,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantWin {
    pub seat: Seat,
    pub reason: InstantWinReason,
    pub bonus: i64,
}

/// Scans dealt hands, in fixed seat order, for an instant win.
///
/// Pure detection: nothing is paid. Callers decide whether to act on it
/// before the showdown starts.
pub fn detect_instant_win(hands: &Hands) -> Option<InstantWin> {
    Seat::ALL.into_iter().find_map(|seat| {
        let reason = instant_win_reason(hands.get(seat))?;
        Some(InstantWin {
            seat,
            reason,
            bonus: INSTANT_WIN_BONUS,
        })
    })
}

fn instant_win_reason(hand: &[Card]) -> Option<InstantWinReason> {
    let mut counts: HashMap<Rank, u8> = HashMap::new();
    for c in hand {
        *counts.entry(c.rank).or_insert(0) += 1;
    }
    let quads: Vec<Rank> = counts
        .into_iter()
        .filter(|&(_, n)| n == 4)
        .map(|(r, _)| r)
        .collect();
    if quads.contains(&Rank::Four) {
        Some(InstantWinReason::QuadFours)
    } else if quads.len() >= 2 {
        Some(InstantWinReason::DoubleQuads)
    } else {
        None
    }
}

/// Outcome of [`validate_hand_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOrder {
    Valid,
    /// The set at `index` scores lower than the set right after it.
    OutOfOrder { index: usize },
}

impl HandOrder {
    pub fn is_valid(self) -> bool {
        matches!(self, HandOrder::Valid)
    }
}

/// Checks that sets are presented strongest to weakest.
///
/// # Examples
///
/// ```
/// use afghound_engine::cards::{Card, Rank, Suit};
/// use afghound_engine::rules::{validate_hand_order, HandOrder};
///
/// let pair = [
///     Card::new(Rank::Nine, Suit::Clubs),
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Two, Suit::Spades),
/// ];
/// let trio = [
///     Card::new(Rank::King, Suit::Clubs),
///     Card::new(Rank::King, Suit::Hearts),
///     Card::new(Rank::King, Suit::Spades),
/// ];
/// assert_eq!(validate_hand_order(&[trio, pair]), HandOrder::Valid);
/// assert_eq!(
///     validate_hand_order(&[pair, trio]),
///     HandOrder::OutOfOrder { index: 0 }
/// );
/// ```
pub fn validate_hand_order(sets: &[CardSet]) -> HandOrder {
    let scores: Vec<_> = sets.iter().map(evaluate_set).collect();
    scores
        .windows(2)
        .position(|w| w[0] < w[1])
        .map_or(HandOrder::Valid, |index| HandOrder::OutOfOrder { index })
}
