//! # afghound-engine: Afghound Scoring and Showdown Engine
//!
//! Core rules for Afghound, a three-seat game played with a 52-card deck:
//! each seat is dealt 17 cards (one seat picks up an 18th), arranges five
//! 3-card sets, and plays them against the other seats over five rounds.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), display and parsing
//! - [`deck`] - Shuffled deck and the dealing primitive
//! - [`hand`] - Three-card set scoring
//! - [`setup`] - Dealing, straddle selection, and remainder placement
//! - [`rules`] - Instant-win detection and hand-order validation
//! - [`showdown`] - The five-round settlement state machine
//! - [`seat`] - Fixed seats and the wallet ledger
//! - [`session`] - Per-table coordinator serializing submissions and settlement
//! - [`logger`] - Showdown history records (JSONL)
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use afghound_engine::cards::{Card, Rank, Suit};
//! use afghound_engine::hand::evaluate_set;
//!
//! let ramji = [
//!     Card::new(Rank::Two, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Five, Suit::Diamonds),
//! ];
//! assert_eq!(evaluate_set(&ramji).value(), 5000.0);
//! ```
//!
//! ## Deterministic Dealing
//!
//! All randomness comes from a caller-supplied RNG:
//!
//! ```rust
//! use afghound_engine::setup::setup_game;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let a = setup_game(&mut ChaCha20Rng::seed_from_u64(7)).unwrap();
//! let b = setup_game(&mut ChaCha20Rng::seed_from_u64(7)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod rules;
pub mod seat;
pub mod session;
pub mod setup;
pub mod showdown;
