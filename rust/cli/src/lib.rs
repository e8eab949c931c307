//! # Afghound CLI Library
//!
//! Command-line driver for the Afghound engine. It stands in for a lobby:
//! it deals games, lets the configured AI arrange every seat, and prints the
//! showdown narration.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["afghound", "play", "--games", "3", "--seed", "7"];
//! let code = afghound_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal one game for inspection
//! - `score`: Score a single three-card set
//! - `play`: Play full games between automated seats
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{AfghoundCli, Commands};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_score_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["deal", "score", "play", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["afghound", "deal", "--seed", "42"];
/// let code = afghound_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match AfghoundCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Score { cards } => handle_score_command(&cards, out),
        Commands::Play {
            games,
            seed,
            output,
        } => handle_play_command(games, seed, output, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Afghound CLI").is_err()
                || writeln!(err, "Usage: afghound <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: afghound --help");
            exit_code::ERROR
        }
    }
}
