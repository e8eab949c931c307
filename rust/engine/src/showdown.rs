//! The five-round showdown: scoring, turn order, and every wallet rule.
//!
//! A [`Showdown`] walks `StraddleRoundLookup -> Round(1..=5) -> SweepCheck ->
//! Done`, paying out through [`Wallets`]'s zero-sum primitives and appending a
//! [`ShowdownEvent`] for everything it announces. [`play_showdown`] runs the
//! whole machine in one call.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{evaluate_set, CardSet, FiveSets, SetScore};
use crate::seat::{Seat, Wallets};
use crate::setup::Straddle;

pub const ROUNDS: u8 = 5;
pub const SETS_PER_SUBMISSION: usize = ROUNDS as usize;

/// Holder pays this to each other seat when the straddle card is mucked.
pub const STRADDLE_MUCK_PENALTY: i64 = 15;
/// Sweeper collects this from each other seat.
pub const SWEEP_BONUS: i64 = 15;

/// Prefix marking bonus and penalty lines in the event log.
pub const EVENT_TAG: &str = "EVENT:";

/// Sets as they arrive from players, before validation.
pub type SubmittedSets = HashMap<Seat, Vec<Vec<Card>>>;

/// One line of the showdown narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShowdownEvent {
    RoundWinner { round: u8, seat: Seat },
    StraddleMucked { holder: Seat },
    StraddleSuccess { holder: Seat, bonus: i64 },
    StraddleBroken { holder: Seat, winner: Seat, amount: i64 },
    RamjiBonus { seat: Seat, amount: i64 },
    Sweep { seat: Seat },
}

impl ShowdownEvent {
    /// Bonus and penalty lines carry the `EVENT:` tag; round results do not.
    pub fn is_tagged(&self) -> bool {
        !matches!(self, ShowdownEvent::RoundWinner { .. })
    }
}

impl fmt::Display for ShowdownEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShowdownEvent::RoundWinner { round, seat } => {
                write!(f, "ROUND {round} WINNER: {seat}")
            }
            ShowdownEvent::StraddleMucked { holder } => write!(
                f,
                "{EVENT_TAG}🚫 STRADDLE MUCKED! {holder} pays ${STRADDLE_MUCK_PENALTY} to each."
            ),
            ShowdownEvent::StraddleSuccess { holder, bonus } => {
                write!(f, "{EVENT_TAG}🎯 STRADDLE SUCCESS! {holder} wins bonus ${bonus}")
            }
            ShowdownEvent::StraddleBroken {
                holder,
                winner,
                amount,
            } => write!(
                f,
                "{EVENT_TAG}🛡️ STRADDLE BROKEN! {holder} pays ${amount} to {winner}"
            ),
            ShowdownEvent::RamjiBonus { seat, amount } => {
                write!(f, "{EVENT_TAG}✨ RAMJI BONUS! {seat} collects ${amount}")
            }
            ShowdownEvent::Sweep { seat } => write!(
                f,
                "{EVENT_TAG}🔥 SWEEP! {seat} collects ${SWEEP_BONUS} from each."
            ),
        }
    }
}

/// Where the showdown machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowdownPhase {
    StraddleRoundLookup,
    Round(u8),
    SweepCheck,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowdownOutcome {
    pub events: Vec<ShowdownEvent>,
    pub round_winners: Vec<Seat>,
    /// Round in which the straddle card was played, if it was.
    pub straddle_round: Option<u8>,
    pub wallets: Wallets,
}

impl ShowdownOutcome {
    /// The event log as the text lines broadcast to players.
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// Validates one seat's raw submission: exactly five sets of three cards, no
/// card used twice, and, when `hand` is given, no card from outside it.
pub fn check_submission(
    seat: Seat,
    sets: &[Vec<Card>],
    hand: Option<&[Card]>,
) -> Result<FiveSets, GameError> {
    let incomplete = |reason: String| GameError::IncompleteSubmission { seat, reason };
    if sets.len() != SETS_PER_SUBMISSION {
        return Err(incomplete(format!(
            "expected {SETS_PER_SUBMISSION} sets, got {}",
            sets.len()
        )));
    }
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(SETS_PER_SUBMISSION);
    for (i, set) in sets.iter().enumerate() {
        let set: CardSet = set.as_slice().try_into().map_err(|_| {
            incomplete(format!("set {} holds {} cards, expected 3", i + 1, set.len()))
        })?;
        for card in set {
            if !seen.insert(card) {
                return Err(incomplete(format!("{card} appears more than once")));
            }
            if let Some(hand) = hand {
                if !hand.contains(&card) {
                    return Err(incomplete(format!("{card} is not in the dealt hand")));
                }
            }
        }
        out.push(set);
    }
    out.try_into()
        .map_err(|_| incomplete("expected five sets".to_string()))
}

/// The showdown state machine for a single game.
#[derive(Debug)]
pub struct Showdown<'w> {
    /// Indexed by [`Seat::index`].
    sets: Vec<FiveSets>,
    straddle: Option<Straddle>,
    wallets: &'w mut Wallets,
    phase: ShowdownPhase,
    straddle_round: Option<u8>,
    turn_order: [Seat; 3],
    round_winners: Vec<Seat>,
    events: Vec<ShowdownEvent>,
}

impl<'w> Showdown<'w> {
    /// Validates every seat's submission before any money moves.
    pub fn new(
        submitted: &SubmittedSets,
        straddle: Option<&Straddle>,
        wallets: &'w mut Wallets,
    ) -> Result<Self, GameError> {
        let mut sets = Vec::with_capacity(Seat::ALL.len());
        let mut seen = HashSet::new();
        for seat in Seat::ALL {
            let raw = submitted.get(&seat).ok_or(GameError::IncompleteSubmission {
                seat,
                reason: "no sets submitted".to_string(),
            })?;
            let checked = check_submission(seat, raw, None)?;
            for card in checked.iter().flatten() {
                if !seen.insert(*card) {
                    return Err(GameError::IncompleteSubmission {
                        seat,
                        reason: format!("{card} was also submitted by another seat"),
                    });
                }
            }
            sets.push(checked);
        }
        Ok(Self {
            sets,
            straddle: straddle.copied(),
            wallets,
            phase: ShowdownPhase::StraddleRoundLookup,
            straddle_round: None,
            turn_order: Seat::ALL,
            round_winners: Vec::with_capacity(SETS_PER_SUBMISSION),
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> ShowdownPhase {
        self.phase
    }

    pub fn turn_order(&self) -> [Seat; 3] {
        self.turn_order
    }

    pub fn events(&self) -> &[ShowdownEvent] {
        &self.events
    }

    pub fn wallets(&self) -> &Wallets {
        self.wallets
    }

    fn score(&self, seat: Seat, round: u8) -> SetScore {
        evaluate_set(&self.sets[seat.index()][usize::from(round - 1)])
    }

    /// Runs the current phase and moves to the next one.
    pub fn step(&mut self) -> ShowdownPhase {
        self.phase = match self.phase {
            ShowdownPhase::StraddleRoundLookup => {
                self.lookup_straddle_round();
                ShowdownPhase::Round(1)
            }
            ShowdownPhase::Round(r) => {
                self.play_round(r);
                if r < ROUNDS {
                    ShowdownPhase::Round(r + 1)
                } else {
                    ShowdownPhase::SweepCheck
                }
            }
            ShowdownPhase::SweepCheck => {
                self.check_sweep();
                ShowdownPhase::Done
            }
            ShowdownPhase::Done => ShowdownPhase::Done,
        };
        self.phase
    }

    pub fn run(mut self) -> ShowdownOutcome {
        while self.step() != ShowdownPhase::Done {}
        tracing::info!(
            winners = ?self.round_winners,
            events = self.events.len(),
            "showdown settled"
        );
        ShowdownOutcome {
            events: self.events,
            round_winners: self.round_winners,
            straddle_round: self.straddle_round,
            wallets: *self.wallets,
        }
    }

    fn lookup_straddle_round(&mut self) {
        let Some(straddle) = self.straddle else {
            return;
        };
        let holder_sets = &self.sets[straddle.holder.index()];
        self.straddle_round = holder_sets
            .iter()
            .position(|set| set.contains(&straddle.card))
            .and_then(|i| u8::try_from(i + 1).ok());
        if self.straddle_round.is_none() {
            tracing::warn!(holder = %straddle.holder, card = %straddle.card, "straddle mucked");
            self.wallets.pay_each(straddle.holder, STRADDLE_MUCK_PENALTY);
            self.events.push(ShowdownEvent::StraddleMucked {
                holder: straddle.holder,
            });
        }
    }

    fn play_round(&mut self, round: u8) {
        let stake = i64::from(round);

        // Ties go to the seat latest in the turn order.
        let mut winner = self.turn_order[2];
        let mut best = self.score(winner, round);
        for &seat in self.turn_order.iter().rev().skip(1) {
            let score = self.score(seat, round);
            if score > best {
                winner = seat;
                best = score;
            }
        }
        tracing::debug!(round, winner = %winner, score = %best, "round settled");
        self.round_winners.push(winner);
        self.events.push(ShowdownEvent::RoundWinner {
            round,
            seat: winner,
        });
        self.wallets.collect_from_each(winner, stake);

        if let Some(straddle) = self.straddle {
            if self.straddle_round == Some(round) {
                if winner == straddle.holder {
                    self.wallets.collect_from_each(straddle.holder, stake);
                    self.events.push(ShowdownEvent::StraddleSuccess {
                        holder: straddle.holder,
                        bonus: stake * 2,
                    });
                } else {
                    self.wallets.transfer(straddle.holder, winner, stake);
                    self.events.push(ShowdownEvent::StraddleBroken {
                        holder: straddle.holder,
                        winner,
                        amount: stake,
                    });
                }
            }
        }

        for seat in Seat::ALL {
            if self.score(seat, round).is_ramji() {
                self.wallets.collect_from_each(seat, stake);
                self.events.push(ShowdownEvent::RamjiBonus {
                    seat,
                    amount: stake * 2,
                });
            }
        }

        if let Some(i) = self.turn_order.iter().position(|s| *s == winner) {
            self.turn_order.rotate_left(i);
        }
    }

    fn check_sweep(&mut self) {
        for seat in Seat::ALL {
            let wins = self.round_winners.iter().filter(|w| **w == seat).count();
            if wins == SETS_PER_SUBMISSION {
                self.wallets.collect_from_each(seat, SWEEP_BONUS);
                self.events.push(ShowdownEvent::Sweep { seat });
            }
        }
    }
}

/// Settles a full showdown against `wallets`.
///
/// Fails with [`GameError::IncompleteSubmission`] before touching the ledger
/// if any seat is missing, short, malformed, or reuses a card. Passing `None`
/// for the straddle skips every straddle rule.
pub fn play_showdown(
    submitted: &SubmittedSets,
    straddle: Option<&Straddle>,
    wallets: &mut Wallets,
) -> Result<ShowdownOutcome, GameError> {
    Ok(Showdown::new(submitted, straddle, wallets)?.run())
}
