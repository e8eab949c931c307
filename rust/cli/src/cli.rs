use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "afghound", version, about = "Afghound Card Game CLI")]
pub struct AfghoundCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one game and show every hand, the straddle, and the remainder
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a single three-card set
    Score {
        /// Three cards, e.g. `2H 3S 5D` or `A♠ 2♥ 3♦`
        #[arg(num_args = 1..)]
        cards: Vec<String>,
    },
    /// Play full games with every seat arranged by the configured AI
    Play {
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Write one showdown record per game to this JSONL file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
