use std::fs;

use afghound_engine::logger::{ShowdownLogger, ShowdownRecord};
use afghound_engine::seat::{Seat, Wallets};
use afghound_engine::session::{GameSession, SubmitStatus};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn settled_record(seed: u64) -> ShowdownRecord {
    let session = GameSession::new("log");
    let setup = session.deal(&mut ChaCha20Rng::seed_from_u64(seed)).unwrap();
    let mut last = None;
    for seat in Seat::ALL {
        let sets = setup.hands.get(seat)[..15]
            .chunks(3)
            .map(|c| c.to_vec())
            .collect();
        last = Some(session.submit(seat, sets).unwrap());
    }
    let Some(SubmitStatus::Settled(outcome)) = last else {
        panic!("showdown should settle on the last submission");
    };
    ShowdownRecord::new(
        "20260101-000001".to_string(),
        Some(seed),
        Some(setup.straddle),
        &outcome,
    )
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("games.jsonl");
    let mut logger = ShowdownLogger::create(&path).expect("create logger");
    logger.write(&settled_record(1)).expect("write");
    logger.write(&settled_record(2)).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    assert_eq!(bytes.iter().filter(|b| **b == b'\n').count(), 2);
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("games.jsonl");
    let mut logger = ShowdownLogger::create(&path).expect("create logger");

    logger.write(&settled_record(3)).expect("write");
    let mut fixed = settled_record(4);
    fixed.ts = Some("2026-01-01T00:00:00Z".to_string());
    logger.write(&fixed).expect("write");

    let content = fs::read_to_string(&path).unwrap();
    let recs: Vec<ShowdownRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert!(recs[0].ts.is_some());
    assert_eq!(recs[1].ts.as_deref(), Some("2026-01-01T00:00:00Z"));
    assert_eq!(recs[0].round_winners.len(), 5);
    assert!(recs[0]
        .events
        .iter()
        .any(|line| line.starts_with("ROUND 5 WINNER:")));
    assert_eq!(recs[1].wallets.total(), Wallets::default().total());
}
