use thiserror::Error;

use crate::seat::Seat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient cards: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Dealing invariant broken: {total} cards accounted for, expected 52")]
    DealingInvariant { total: usize },
    #[error("Incomplete submission from {seat}: {reason}")]
    IncompleteSubmission { seat: Seat, reason: String },
    #[error("A set must hold exactly 3 cards, got {len}")]
    InvalidSetSize { len: usize },
    #[error("Unknown seat: {0}")]
    UnknownSeat(String),
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Session state lock poisoned")]
    SessionPoisoned,
}
