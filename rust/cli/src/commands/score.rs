//! Score command: evaluates one three-card set.

use crate::error::CliError;
use afghound_engine::cards::Card;
use afghound_engine::hand::score_set;
use std::io::Write;

pub fn handle_score_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = cards
        .iter()
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;
    let score = score_set(&parsed)?;
    writeln!(out, "Score: {} ({:?})", score, score.category())?;
    Ok(())
}
