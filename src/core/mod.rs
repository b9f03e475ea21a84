//! Core types: cards, the seeded RNG, deck generation, configuration, errors.
//!
//! Everything here is independent of the pile layout and rules; the
//! engine consumes a `Deck` once per deal.

pub mod card;
pub mod rng;
pub mod deck;
pub mod config;
pub mod error;

pub use card::{Card, Rank, Suit, DECK_SIZE, NUM_RANKS, NUM_SUITS};
pub use rng::{normalize_seed, GameRng, GameRngState};
pub use deck::{create_deck, shuffle, shuffle_with, validate_permutation, Deck};
pub use config::{time_seed, GameOptions};
pub use error::{DeckError, EngineError};
