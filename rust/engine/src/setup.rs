use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::seat::Seat;

/// Cards dealt to each seat before the remainder is placed.
pub const HAND_SIZE: usize = 17;
const DECK_SIZE: usize = 52;

/// The three seats' hands, indexed by [`Seat`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hands {
    hands: [Vec<Card>; 3],
}

impl Hands {
    pub fn from_hands(hands: [Vec<Card>; 3]) -> Self {
        Self { hands }
    }

    pub fn get(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    fn push(&mut self, seat: Seat, card: Card) {
        self.hands[seat.index()].push(card);
    }

    /// First seat, in fixed order, holding `card`.
    pub fn holder_of(&self, card: &Card) -> Option<Seat> {
        Seat::ALL.into_iter().find(|s| self.get(*s).contains(card))
    }

    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Seat, &[Card])> + '_ {
        Seat::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

/// The randomly designated straddle card and the seat that was dealt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Straddle {
    pub card: Card,
    pub holder: Seat,
}

/// Everything produced by dealing one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub hands: Hands,
    pub straddle: Straddle,
    /// The 52nd card, dealt to no one directly.
    pub remainder: Card,
    /// Seat whose hand the remainder joined.
    pub remainder_holder: Seat,
}

/// Shuffles a fresh deck with `rng` and deals a game from it.
pub fn setup_game<R: Rng + ?Sized>(rng: &mut R) -> Result<GameSetup, GameError> {
    let deck = Deck::shuffled(rng);
    setup_from_deck(deck, rng)
}

/// Deals a game from an already ordered deck; `rng` only picks the straddle.
///
/// 17 cards go to each seat in fixed order. The straddle is drawn uniformly
/// from those 51 cards. The remaining card goes to whoever holds the card of
/// the same suit at the opposite extreme rank (an Ace for a Two, a Two for
/// anything else), or to Afghound when nobody does.
pub fn setup_from_deck<R: Rng + ?Sized>(
    mut deck: Deck,
    rng: &mut R,
) -> Result<GameSetup, GameError> {
    let mut hands = Hands::default();
    for seat in Seat::ALL {
        for card in deck.deal(HAND_SIZE)? {
            hands.push(seat, card);
        }
    }

    let dealt: Vec<Card> = hands.iter().flat_map(|(_, h)| h.iter().copied()).collect();
    let total = dealt.len();
    let card = *dealt
        .choose(rng)
        .ok_or(GameError::DealingInvariant { total })?;
    let holder = hands
        .holder_of(&card)
        .ok_or(GameError::DealingInvariant { total })?;
    tracing::debug!(straddle = %card, holder = %holder, "straddle drawn");

    let remainder = deck
        .deal(1)?
        .pop()
        .ok_or(GameError::DealingInvariant { total })?;
    let target_rank = if remainder.rank == Rank::Two {
        Rank::Ace
    } else {
        Rank::Two
    };
    let target = Card::new(target_rank, remainder.suit);
    let remainder_holder = hands.holder_of(&target).unwrap_or(Seat::Afghound);
    hands.push(remainder_holder, remainder);
    tracing::debug!(
        remainder = %remainder,
        target = %target,
        seat = %remainder_holder,
        "remainder placed"
    );

    let total = hands.total_cards() + deck.remaining();
    let unique: HashSet<Card> = hands.iter().flat_map(|(_, h)| h.iter().copied()).collect();
    if total != DECK_SIZE || unique.len() != hands.total_cards() {
        return Err(GameError::DealingInvariant { total });
    }

    Ok(GameSetup {
        hands,
        straddle: Straddle { card, holder },
        remainder,
        remainder_holder,
    })
}
