//! UI helper functions for terminal output formatting.

use std::io::Write;

use afghound_engine::cards::{sort_by_rank, Card};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Cards sorted by rank and joined with spaces, as shown to players.
pub fn format_cards(cards: &[Card]) -> String {
    let mut sorted = cards.to_vec();
    sort_by_rank(&mut sorted);
    sorted
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A set in play order, unsorted.
pub fn format_set(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
