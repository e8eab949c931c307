//! Greedy five-round partitioner.
//!
//! Builds the strongest set it can from the cards left, five times over, and
//! never revisits an earlier pick. This is an approximation: a hand can hold a
//! better five-set split than the one found here, and that is how the
//! automated seat is expected to play.

use std::cmp::Ordering;

use afghound_engine::cards::Card;
use afghound_engine::errors::GameError;
use afghound_engine::hand::{evaluate_set, CardSet, FiveSets, SetScore};
use itertools::Itertools;

use crate::Partitioner;

const SETS: usize = 5;
const CARDS_NEEDED: usize = SETS * 3;

/// Greedy brute-force partitioner used by automated seats.
///
/// # Example
///
/// ```rust
/// use afghound_ai::greedy::Greedy5RoundPartitioner;
/// use afghound_ai::Partitioner;
/// use afghound_engine::hand::evaluate_set;
/// use afghound_engine::rules::validate_hand_order;
/// use afghound_engine::setup::setup_game;
/// use afghound_engine::seat::Seat;
/// use rand::SeedableRng;
///
/// let setup = setup_game(&mut rand_chacha::ChaCha20Rng::seed_from_u64(3)).unwrap();
/// let sets = Greedy5RoundPartitioner::new()
///     .partition(setup.hands.get(Seat::Player2))
///     .unwrap();
/// assert!(validate_hand_order(&sets).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Greedy5RoundPartitioner;

impl Greedy5RoundPartitioner {
    pub fn new() -> Self {
        Self
    }

    /// Highest-scoring 3-card combination of `pool`; the first one
    /// enumerated wins ties.
    fn best_set(pool: &[Card]) -> Option<(CardSet, SetScore)> {
        let mut best: Option<(CardSet, SetScore)> = None;
        for combo in pool.iter().copied().combinations(3) {
            let set = [combo[0], combo[1], combo[2]];
            let score = evaluate_set(&set);
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((set, score));
            }
        }
        best
    }
}

impl Partitioner for Greedy5RoundPartitioner {
    fn partition(&self, hand: &[Card]) -> Result<FiveSets, GameError> {
        if hand.len() < CARDS_NEEDED {
            return Err(GameError::InsufficientCards {
                requested: CARDS_NEEDED,
                remaining: hand.len(),
            });
        }

        let mut remaining = hand.to_vec();
        let mut picked: Vec<(CardSet, SetScore)> = Vec::with_capacity(SETS);
        for _ in 0..SETS {
            let (set, score) = Self::best_set(&remaining).ok_or(GameError::InsufficientCards {
                requested: 3,
                remaining: remaining.len(),
            })?;
            remaining.retain(|c| !set.contains(c));
            picked.push((set, score));
        }
        tracing::debug!(discarded = remaining.len(), "greedy partition complete");

        // stable: equal scores keep pick order
        picked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let sets: Vec<CardSet> = picked.into_iter().map(|(set, _)| set).collect();
        sets.try_into().map_err(|v: Vec<CardSet>| GameError::InsufficientCards {
            requested: CARDS_NEEDED,
            remaining: v.len() * 3,
        })
    }

    fn name(&self) -> &str {
        "Greedy5RoundPartitioner"
    }
}
