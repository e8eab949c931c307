use std::collections::HashSet;

use afghound_engine::cards::Card;
use afghound_engine::deck::Deck;
use afghound_engine::errors::GameError;

#[test]
fn fresh_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    assert_eq!(deck.remaining(), 52);
    let cards = deck.deal(52).expect("52 cards available");
    let set: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn dealt_plus_remaining_is_always_52() {
    let mut deck = Deck::new_with_seed(3);
    let mut dealt = 0;
    for n in [17, 17, 17, 1] {
        dealt += deck.deal(n).unwrap().len();
        assert_eq!(dealt + deck.remaining(), 52);
    }
}

#[test]
fn deal_fails_when_deck_is_short() {
    let mut deck = Deck::new_with_seed(9);
    deck.deal(50).unwrap();
    assert_eq!(
        deck.deal(3),
        Err(GameError::InsufficientCards {
            requested: 3,
            remaining: 2
        })
    );
    // a failed deal leaves the deck untouched
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn deal_takes_from_the_top_in_order() {
    let mut deck = Deck::new_with_seed(11);
    let top = *deck.peek().unwrap();
    let first = deck.deal(1).unwrap();
    assert_eq!(first, vec![top]);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    assert_eq!(d1.deal(10).unwrap(), d2.deal(10).unwrap());
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    assert_ne!(
        d1.deal(10).unwrap(),
        d2.deal(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}
