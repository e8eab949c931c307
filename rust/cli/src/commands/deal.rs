//! Deal command handler.
//!
//! Deals one game and prints each seat's hand sorted by rank, the straddle
//! card and holder, where the remainder card went, and any instant win.
//! The seed comes from `--seed`, then the configured seed, then a random one.

use crate::config;
use crate::error::CliError;
use crate::ui::format_cards;
use afghound_engine::rules::{detect_instant_win, InstantWinReason};
use afghound_engine::setup::setup_game;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(base_seed);
    let setup = setup_game(&mut rng)?;

    for (seat, hand) in setup.hands.iter() {
        writeln!(out, "{} ({}): {}", seat, hand.len(), format_cards(hand))?;
    }
    writeln!(
        out,
        "Straddle: {} held by {}",
        setup.straddle.card, setup.straddle.holder
    )?;
    writeln!(
        out,
        "Remainder: {} -> {}",
        setup.remainder, setup.remainder_holder
    )?;
    if let Some(win) = detect_instant_win(&setup.hands) {
        let reason = match win.reason {
            InstantWinReason::QuadFours => "QUAD 4s",
            InstantWinReason::DoubleQuads => "DOUBLE QUADS",
        };
        writeln!(out, "Instant win: {} ({}, bonus {})", win.seat, reason, win.bonus)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(12345), &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(999), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines.len() >= 5);
        assert!(lines[0].starts_with("Afghound ("));
        assert!(lines[1].starts_with("Player 2 ("));
        assert!(lines[2].starts_with("Player 3 ("));
        assert!(lines[3].starts_with("Straddle: "));
        assert!(lines[4].starts_with("Remainder: "));
        let eighteen = lines[..3].iter().filter(|l| l.contains("(18)")).count();
        assert_eq!(eighteen, 1, "exactly one seat picks up the remainder");
    }
}
