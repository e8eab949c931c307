use std::collections::HashSet;

use afghound_engine::cards::{full_deck, Card, Rank as R, Suit as S};
use afghound_engine::deck::Deck;
use afghound_engine::errors::GameError;
use afghound_engine::seat::Seat;
use afghound_engine::setup::{setup_from_deck, setup_game, HAND_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

#[test]
fn every_deal_accounts_for_all_52_cards_once() {
    for seed in 0..40 {
        let setup = setup_game(&mut rng(seed)).expect("setup");
        let all: Vec<Card> = setup
            .hands
            .iter()
            .flat_map(|(_, h)| h.iter().copied())
            .collect();
        assert_eq!(all.len(), 52, "seed {seed}");
        let unique: HashSet<Card> = all.into_iter().collect();
        assert_eq!(unique.len(), 52, "seed {seed}");
    }
}

#[test]
fn exactly_one_seat_holds_eighteen_cards() {
    for seed in 0..40 {
        let setup = setup_game(&mut rng(seed)).unwrap();
        let sizes: Vec<usize> = setup.hands.iter().map(|(_, h)| h.len()).collect();
        assert_eq!(sizes.iter().filter(|n| **n == HAND_SIZE + 1).count(), 1);
        assert_eq!(sizes.iter().filter(|n| **n == HAND_SIZE).count(), 2);
        assert_eq!(setup.hands.get(setup.remainder_holder).len(), HAND_SIZE + 1);
    }
}

#[test]
fn straddle_holder_was_dealt_the_straddle_card() {
    for seed in 0..40 {
        let setup = setup_game(&mut rng(seed)).unwrap();
        assert!(setup
            .hands
            .get(setup.straddle.holder)
            .contains(&setup.straddle.card));
        assert_ne!(setup.straddle.card, setup.remainder);
    }
}

#[test]
fn same_seed_gives_same_game() {
    assert_eq!(setup_game(&mut rng(77)).unwrap(), setup_game(&mut rng(77)).unwrap());
}

#[test]
fn remainder_goes_to_holder_of_same_suit_two() {
    // Unshuffled: Player 3 is dealt 2♣ and the remainder is A♣.
    let setup = setup_from_deck(Deck::from_cards(full_deck()), &mut rng(1)).unwrap();
    assert_eq!(setup.remainder, Card::new(R::Ace, S::Clubs));
    assert_eq!(setup.remainder_holder, Seat::Player3);
    assert!(setup.hands.get(Seat::Player3).contains(&Card::new(R::Two, S::Clubs)));
    assert_eq!(setup.hands.get(Seat::Player3).len(), 18);
}

#[test]
fn remainder_two_goes_to_holder_of_same_suit_ace() {
    let two_clubs = Card::new(R::Two, S::Clubs);
    let ace_clubs = Card::new(R::Ace, S::Clubs);
    let mut cards: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| *c != two_clubs && *c != ace_clubs)
        .collect();
    // first card of Player 2's deal
    cards.insert(HAND_SIZE, ace_clubs);
    cards.push(two_clubs);

    let setup = setup_from_deck(Deck::from_cards(cards), &mut rng(1)).unwrap();
    assert_eq!(setup.remainder, two_clubs);
    assert_eq!(setup.remainder_holder, Seat::Player2);
    assert_eq!(setup.hands.get(Seat::Player2).len(), 18);
    assert_eq!(setup.hands.get(Seat::Afghound).len(), 17);
}

#[test]
fn short_deck_is_insufficient() {
    let cards: Vec<Card> = full_deck().into_iter().take(40).collect();
    let err = setup_from_deck(Deck::from_cards(cards), &mut rng(1)).unwrap_err();
    assert!(matches!(err, GameError::InsufficientCards { .. }));
}

#[test]
fn oversized_or_duplicated_deck_breaks_the_dealing_invariant() {
    let mut cards = full_deck();
    cards.push(Card::new(R::Ace, S::Spades));
    let err = setup_from_deck(Deck::from_cards(cards), &mut rng(1)).unwrap_err();
    assert!(matches!(err, GameError::DealingInvariant { .. }));

    let mut dup = full_deck();
    dup[51] = dup[0];
    let err = setup_from_deck(Deck::from_cards(dup), &mut rng(1)).unwrap_err();
    assert!(matches!(err, GameError::DealingInvariant { .. }));
}
