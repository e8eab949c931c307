use std::sync::Arc;
use std::thread;

use afghound_engine::cards::Card;
use afghound_engine::errors::GameError;
use afghound_engine::hand::FiveSets;
use afghound_engine::seat::{Seat, Wallets};
use afghound_engine::session::{GameSession, SubmitStatus};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn first_fifteen(hand: &[Card]) -> Vec<Vec<Card>> {
    hand[..15].chunks(3).map(<[Card]>::to_vec).collect()
}

fn chunk_fill(hand: &[Card]) -> Result<FiveSets, GameError> {
    let sets: Vec<[Card; 3]> = hand[..15]
        .chunks(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();
    sets.try_into().map_err(|_| GameError::InvalidSetSize { len: hand.len() })
}

#[test]
fn last_submission_settles_and_clears() {
    let session = GameSession::new("t1");
    let setup = session.deal(&mut ChaCha20Rng::seed_from_u64(5)).unwrap();

    let status = session
        .submit(Seat::Afghound, first_fifteen(setup.hands.get(Seat::Afghound)))
        .unwrap();
    assert_eq!(status, SubmitStatus::Waiting { ready: 1, needed: 3 });
    session
        .submit(Seat::Player2, first_fifteen(setup.hands.get(Seat::Player2)))
        .unwrap();
    let status = session
        .submit(Seat::Player3, first_fifteen(setup.hands.get(Seat::Player3)))
        .unwrap();

    let outcome = match status {
        SubmitStatus::Settled(outcome) => outcome,
        other => panic!("expected settlement, got {other:?}"),
    };
    assert_eq!(outcome.round_winners.len(), 5);
    assert_eq!(session.wallets().unwrap(), outcome.wallets);
    assert_eq!(session.wallets().unwrap().total(), 300);
    assert_eq!(session.submitted_count().unwrap(), 0);
    assert_eq!(session.current_setup().unwrap(), None);
}

#[test]
fn resubmitting_replaces_the_earlier_sets() {
    let session = GameSession::new("t2");
    let setup = session.deal(&mut ChaCha20Rng::seed_from_u64(6)).unwrap();
    let hand = setup.hands.get(Seat::Player2);
    session.submit(Seat::Player2, first_fifteen(hand)).unwrap();
    let reversed: Vec<Card> = hand.iter().rev().copied().collect();
    let status = session.submit(Seat::Player2, first_fifteen(&reversed)).unwrap();
    assert_eq!(status, SubmitStatus::Waiting { ready: 1, needed: 3 });
}

#[test]
fn foreign_cards_are_rejected() {
    let session = GameSession::new("t3");
    let setup = session.deal(&mut ChaCha20Rng::seed_from_u64(8)).unwrap();
    let stolen = first_fifteen(setup.hands.get(Seat::Player3));
    let err = session.submit(Seat::Afghound, stolen).unwrap_err();
    assert!(matches!(
        err,
        GameError::IncompleteSubmission {
            seat: Seat::Afghound,
            ..
        }
    ));
    assert_eq!(session.submitted_count().unwrap(), 0);
}

#[test]
fn force_showdown_fills_missing_seats() {
    let session = GameSession::new("t4");
    let setup = session.deal(&mut ChaCha20Rng::seed_from_u64(9)).unwrap();
    session
        .submit(Seat::Player3, first_fifteen(setup.hands.get(Seat::Player3)))
        .unwrap();
    let mut filled = 0;
    let outcome = session
        .force_showdown(|hand| {
            filled += 1;
            chunk_fill(hand)
        })
        .unwrap();
    assert_eq!(filled, 2);
    assert_eq!(outcome.round_winners.len(), 5);
    assert_eq!(session.submitted_count().unwrap(), 0);
}

#[test]
fn force_showdown_needs_at_least_one_submission() {
    let session = GameSession::new("t5");
    session.deal(&mut ChaCha20Rng::seed_from_u64(10)).unwrap();
    assert!(matches!(
        session.force_showdown(chunk_fill),
        Err(GameError::IncompleteSubmission { .. })
    ));
}

#[test]
fn reset_restores_starting_balances() {
    let session = GameSession::with_starting_balance("t6", 250);
    let setup = session.deal(&mut ChaCha20Rng::seed_from_u64(11)).unwrap();
    for seat in Seat::ALL {
        session
            .submit(seat, first_fifteen(setup.hands.get(seat)))
            .unwrap();
    }
    session.reset().unwrap();
    assert_eq!(session.wallets().unwrap(), Wallets::with_balance(250));
    assert_eq!(session.current_setup().unwrap(), None);
}

#[test]
fn concurrent_submissions_settle_exactly_once() {
    let session = Arc::new(GameSession::new("t7"));
    let setup = session.deal(&mut ChaCha20Rng::seed_from_u64(12)).unwrap();

    let handles: Vec<_> = Seat::ALL
        .into_iter()
        .map(|seat| {
            let session = Arc::clone(&session);
            let sets = first_fifteen(setup.hands.get(seat));
            thread::spawn(move || session.submit(seat, sets))
        })
        .collect();

    let settled = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .filter(|r| matches!(r, Ok(SubmitStatus::Settled(_))))
        .count();
    assert_eq!(settled, 1);
    assert_eq!(session.wallets().unwrap().total(), 300);
}

fn row(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

#[test]
fn submissions_after_settlement_wait_for_the_next_deal() {
    let session = GameSession::new("t8");
    let setup = session.deal(&mut ChaCha20Rng::seed_from_u64(13)).unwrap();
    for seat in Seat::ALL {
        session
            .submit(seat, first_fifteen(setup.hands.get(seat)))
            .unwrap();
    }
    let settled = session.wallets().unwrap();

    let trios = vec![
        row("AS AH AD"),
        row("KS KH KD"),
        row("QS QH QD"),
        row("JS JH JD"),
        row("10S 10H 10D"),
    ];
    let err = session.submit(Seat::Afghound, trios).unwrap_err();
    assert_eq!(
        err,
        GameError::IncompleteSubmission {
            seat: Seat::Afghound,
            reason: "no active deal".to_string(),
        }
    );
    assert_eq!(session.submitted_count().unwrap(), 0);
    assert_eq!(session.wallets().unwrap(), settled);
}

#[test]
fn fresh_session_rejects_submissions_and_forced_showdowns() {
    let session = GameSession::new("t9");
    let deck: Vec<Card> = afghound_engine::cards::full_deck();
    let err = session.submit(Seat::Player2, first_fifteen(&deck)).unwrap_err();
    assert!(matches!(
        err,
        GameError::IncompleteSubmission {
            seat: Seat::Player2,
            ..
        }
    ));
    assert!(matches!(
        session.force_showdown(chunk_fill),
        Err(GameError::IncompleteSubmission { .. })
    ));
    assert_eq!(session.wallets().unwrap(), Wallets::default());
}
