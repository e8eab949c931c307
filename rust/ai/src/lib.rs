//! # afghound-ai: Automated Afghound Opponents
//!
//! Seats without a human still have to turn a dealt hand into five sets.
//! This crate provides the strategies that do it.
//!
//! ## Core Components
//!
//! - [`Partitioner`] - Trait for turning a hand into five ordered sets
//! - [`greedy`] - The greedy five-round partitioner
//! - [`create_partitioner`] - Factory for creating partitioners by name
//!
//! ## Quick Start
//!
//! ```rust
//! use afghound_ai::create_partitioner;
//! use afghound_engine::setup::setup_game;
//! use afghound_engine::seat::Seat;
//! use rand::SeedableRng;
//!
//! let ai = create_partitioner("greedy").expect("known partitioner");
//! let setup = setup_game(&mut rand_chacha::ChaCha20Rng::seed_from_u64(42)).unwrap();
//! let sets = ai.partition(setup.hands.get(Seat::Afghound)).unwrap();
//! assert_eq!(sets.len(), 5);
//! ```

use afghound_engine::cards::Card;
use afghound_engine::errors::GameError;
use afghound_engine::hand::FiveSets;

pub mod greedy;

pub use greedy::Greedy5RoundPartitioner;

/// Names accepted by [`create_partitioner`].
pub const PARTITIONERS: &[&str] = &["greedy"];

/// Interface for automated seats: arrange a dealt hand into five sets.
///
/// # Example Implementation
///
/// ```rust
/// use afghound_ai::Partitioner;
/// use afghound_engine::cards::Card;
/// use afghound_engine::errors::GameError;
/// use afghound_engine::hand::FiveSets;
///
/// struct InDealOrder;
///
/// impl Partitioner for InDealOrder {
///     fn partition(&self, hand: &[Card]) -> Result<FiveSets, GameError> {
///         let c = |i: usize| hand.get(i).copied().ok_or(GameError::InsufficientCards {
///             requested: 15,
///             remaining: hand.len(),
///         });
///         let mut sets = [[c(0)?; 3]; 5];
///         for (i, slot) in sets.iter_mut().flatten().enumerate() {
///             *slot = c(i)?;
///         }
///         Ok(sets)
///     }
///
///     fn name(&self) -> &str {
///         "InDealOrder"
///     }
/// }
/// ```
pub trait Partitioner: Send + Sync {
    /// Picks five disjoint sets from `hand`, in the order they will be played.
    /// Cards left over are discarded.
    fn partition(&self, hand: &[Card]) -> Result<FiveSets, GameError>;

    fn name(&self) -> &str;
}

/// Creates a partitioner by name, or `None` for an unknown name.
///
/// ```rust
/// use afghound_ai::create_partitioner;
///
/// let ai = create_partitioner("greedy").unwrap();
/// assert_eq!(ai.name(), "Greedy5RoundPartitioner");
/// assert!(create_partitioner("optimal").is_none());
/// ```
pub fn create_partitioner(kind: &str) -> Option<Box<dyn Partitioner>> {
    match kind {
        "greedy" => Some(Box::new(Greedy5RoundPartitioner::new())),
        _ => None,
    }
}
