use std::sync::{Mutex, MutexGuard};

use rand::Rng;

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::FiveSets;
use crate::seat::{Seat, Wallets, STARTING_BALANCE};
use crate::setup::{setup_game, GameSetup};
use crate::showdown::{check_submission, play_showdown, ShowdownOutcome, SubmittedSets};

/// Result of accepting one seat's sets.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    /// Still waiting on other seats.
    Waiting { ready: usize, needed: usize },
    /// This submission completed the table and the showdown was settled.
    Settled(ShowdownOutcome),
}

#[derive(Debug)]
struct SessionState {
    wallets: Wallets,
    setup: Option<GameSetup>,
    submissions: SubmittedSets,
}

/// One table's state: ledger, current deal, and pending submissions.
///
/// All of it sits behind a single lock, so "check every seat submitted, run
/// the showdown, clear submissions" happens as one step and two late
/// submissions can never settle against the same ledger twice.
#[derive(Debug)]
pub struct GameSession {
    id: String,
    starting_balance: i64,
    state: Mutex<SessionState>,
}

impl GameSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_starting_balance(id, STARTING_BALANCE)
    }

    pub fn with_starting_balance(id: impl Into<String>, starting_balance: i64) -> Self {
        let id = id.into();
        tracing::info!(session_id = %id, starting_balance, "creating game session");
        Self {
            id,
            starting_balance,
            state: Mutex::new(SessionState {
                wallets: Wallets::with_balance(starting_balance),
                setup: None,
                submissions: SubmittedSets::new(),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionState>, GameError> {
        self.state.lock().map_err(|_| GameError::SessionPoisoned)
    }

    /// Deals a new game, discarding any pending submissions.
    pub fn deal<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameSetup, GameError> {
        let setup = setup_game(rng)?;
        let mut state = self.lock()?;
        state.submissions.clear();
        state.setup = Some(setup.clone());
        tracing::info!(
            session_id = %self.id,
            straddle = %setup.straddle.card,
            holder = %setup.straddle.holder,
            "game dealt"
        );
        Ok(setup)
    }

    pub fn current_setup(&self) -> Result<Option<GameSetup>, GameError> {
        Ok(self.lock()?.setup.clone())
    }

    pub fn wallets(&self) -> Result<Wallets, GameError> {
        Ok(self.lock()?.wallets)
    }

    pub fn submitted_count(&self) -> Result<usize, GameError> {
        Ok(self.lock()?.submissions.len())
    }

    /// Records a seat's five sets. The submission that completes the table
    /// settles the showdown before the lock is released.
    ///
    /// Only cards from the seat's dealt hand are accepted, so submitting
    /// between a settlement and the next deal fails.
    pub fn submit(&self, seat: Seat, sets: Vec<Vec<Card>>) -> Result<SubmitStatus, GameError> {
        let mut state = self.lock()?;
        let Some(setup) = state.setup.as_ref() else {
            tracing::warn!(session_id = %self.id, seat = %seat, "submission without an active deal");
            return Err(GameError::IncompleteSubmission {
                seat,
                reason: "no active deal".to_string(),
            });
        };
        if let Err(e) = check_submission(seat, &sets, Some(setup.hands.get(seat))) {
            tracing::warn!(session_id = %self.id, seat = %seat, error = %e, "submission rejected");
            return Err(e);
        }
        state.submissions.insert(seat, sets);

        let ready = state.submissions.len();
        let needed = Seat::ALL.len();
        if ready < needed {
            tracing::debug!(session_id = %self.id, ready, needed, "waiting for submissions");
            return Ok(SubmitStatus::Waiting { ready, needed });
        }

        match self.settle(&mut state) {
            Ok(outcome) => Ok(SubmitStatus::Settled(outcome)),
            Err(e) => {
                state.submissions.remove(&seat);
                Err(e)
            }
        }
    }

    /// Settles with whatever has been submitted, letting `fill` choose sets
    /// for every seat that has not submitted yet.
    ///
    /// Needs an active deal with at least one submission; filled sets are
    /// checked against the seat's hand like any other submission.
    pub fn force_showdown<F>(&self, mut fill: F) -> Result<ShowdownOutcome, GameError>
    where
        F: FnMut(&[Card]) -> Result<FiveSets, GameError>,
    {
        let mut state = self.lock()?;
        let Some(hands) = state.setup.as_ref().map(|s| s.hands.clone()) else {
            return Err(GameError::IncompleteSubmission {
                seat: Seat::Afghound,
                reason: "no active deal".to_string(),
            });
        };
        if state.submissions.is_empty() {
            return Err(GameError::IncompleteSubmission {
                seat: Seat::Afghound,
                reason: "no submissions to force a showdown with".to_string(),
            });
        }
        for seat in Seat::ALL {
            if state.submissions.contains_key(&seat) {
                continue;
            }
            let sets: Vec<Vec<Card>> = fill(hands.get(seat))?
                .iter()
                .map(|s| s.to_vec())
                .collect();
            check_submission(seat, &sets, Some(hands.get(seat)))?;
            tracing::info!(session_id = %self.id, seat = %seat, "filling missing submission");
            state.submissions.insert(seat, sets);
        }
        self.settle(&mut state)
    }

    /// Clears the deal and submissions and restores every starting balance.
    pub fn reset(&self) -> Result<(), GameError> {
        let mut state = self.lock()?;
        state.setup = None;
        state.submissions.clear();
        state.wallets = Wallets::with_balance(self.starting_balance);
        tracing::info!(session_id = %self.id, "session reset");
        Ok(())
    }

    fn settle(&self, state: &mut SessionState) -> Result<ShowdownOutcome, GameError> {
        let straddle = state.setup.as_ref().map(|s| s.straddle);
        let mut wallets = state.wallets;
        let outcome = play_showdown(&state.submissions, straddle.as_ref(), &mut wallets)?;
        state.wallets = wallets;
        state.submissions.clear();
        state.setup = None;
        tracing::info!(session_id = %self.id, "showdown complete, submissions cleared");
        Ok(outcome)
    }
}
