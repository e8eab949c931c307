//! Play command handler.
//!
//! Runs complete games through a [`GameSession`]: deal, let the configured AI
//! arrange every seat's hand, submit, and print the showdown narration. The
//! ledger carries over from game to game.

use crate::config;
use crate::error::CliError;
use crate::ui::format_set;
use afghound_ai::create_partitioner;
use afghound_engine::logger::{ShowdownLogger, ShowdownRecord};
use afghound_engine::rules::detect_instant_win;
use afghound_engine::seat::Seat;
use afghound_engine::session::{GameSession, SubmitStatus};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::path::PathBuf;

/// Handle the play command.
///
/// # Arguments
///
/// * `games` - Number of games to play (must be at least 1)
/// * `seed` - RNG seed; falls back to the configured seed, then a random one
/// * `output` - Optional JSONL file receiving one showdown record per game
/// * `out` - Output stream for the narration and final balances
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for zero games, `CliError::Config` for a
/// bad configuration, and `CliError::Engine` if a game cannot be settled.
pub fn handle_play_command(
    games: u32,
    seed: Option<u64>,
    output: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".into()));
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let ai = create_partitioner(&cfg.ai)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let mut logger = match &output {
        Some(path) => Some(ShowdownLogger::create(path)?),
        None => None,
    };

    let session = GameSession::with_starting_balance(format!("cli-{seed}"), cfg.starting_balance);
    for game in 1..=games {
        let setup = session.deal(&mut rng)?;
        writeln!(out, "Game {game}/{games}")?;
        writeln!(
            out,
            "Straddle: {} held by {}",
            setup.straddle.card, setup.straddle.holder
        )?;
        if let Some(win) = detect_instant_win(&setup.hands) {
            writeln!(out, "Instant win available: {} ({:?})", win.seat, win.reason)?;
        }

        let mut settled = None;
        for seat in Seat::ALL {
            let sets = ai.partition(setup.hands.get(seat))?;
            let row: Vec<String> = sets.iter().map(|s| format_set(s)).collect();
            writeln!(out, "{seat}: {}", row.join(" | "))?;
            if let SubmitStatus::Settled(outcome) =
                session.submit(seat, sets.iter().map(|s| s.to_vec()).collect())?
            {
                settled = Some(outcome);
            }
        }
        let outcome = settled.ok_or_else(|| {
            CliError::InvalidInput("showdown did not settle after all seats submitted".into())
        })?;

        for line in outcome.log_lines() {
            writeln!(out, "{line}")?;
        }
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            let record = ShowdownRecord::new(id, Some(seed), Some(setup.straddle), &outcome);
            logger.write(&record)?;
        }
    }

    let wallets = session.wallets()?;
    let balances: Vec<String> = wallets
        .iter()
        .map(|(seat, balance)| format!("{seat}={balance}"))
        .collect();
    writeln!(out, "Wallets: {}", balances.join(", "))?;
    Ok(())
}
