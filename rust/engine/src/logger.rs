use serde::{Deserialize, Serialize};

use crate::seat::{Seat, Wallets};
use crate::setup::Straddle;
use crate::showdown::ShowdownOutcome;

/// One settled game, serialized to JSONL for showdown history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowdownRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed used for the deal, when the game was seeded
    pub seed: Option<u64>,
    /// Straddle card and holder, absent for forced showdowns without a deal
    pub straddle: Option<Straddle>,
    /// Winner of each round, in round order
    pub round_winners: Vec<Seat>,
    /// The event log exactly as broadcast
    pub events: Vec<String>,
    /// Ledger after settlement
    pub wallets: Wallets,
    /// Timestamp when the game was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl ShowdownRecord {
    pub fn new(
        game_id: String,
        seed: Option<u64>,
        straddle: Option<Straddle>,
        outcome: &ShowdownOutcome,
    ) -> Self {
        Self {
            game_id,
            seed,
            straddle,
            round_winners: outcome.round_winners.clone(),
            events: outcome.log_lines(),
            wallets: outcome.wallets,
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct ShowdownLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl ShowdownLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that numbers games but writes nothing.
    pub fn in_memory(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &ShowdownRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_ids_are_sequential_and_zero_padded() {
        let mut logger = ShowdownLogger::in_memory("20260101");
        assert_eq!(logger.next_id(), "20260101-000001");
        assert_eq!(logger.next_id(), "20260101-000002");
    }
}
