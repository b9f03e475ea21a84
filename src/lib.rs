//! # klondike-engine
//!
//! Deterministic Klondike solitaire: a seeded deck generator and the rules
//! engine that sits behind any solitaire front end.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A seed fully determines the deal. Same seed, same
//!    game, on every platform.
//!
//! 2. **Commands, not callbacks**: All state changes go through the
//!    `Solitaire` command methods. Renderers read `Snapshot`s and
//!    `GameEvent`s; they never mutate piles.
//!
//! 3. **Rejections are outcomes**: Illegal moves return `MoveOutcome::Illegal`
//!    and leave the game untouched. Errors are reserved for caller
//!    contract violations.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles are `im::Vector`s, so snapshots
//!   are O(1) clones.
//!
//! - **Tagged selection**: A selection is one of three enum variants and
//!   every move matches on it exhaustively.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, deck generation, configuration, errors
//! - `zones`: Pile storage (stock, waste, tableau, foundations)
//! - `rules`: Move legality and command outcomes
//! - `engine`: The game itself, auto-solve, snapshots and events

pub mod core;
pub mod zones;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Card, Rank, Suit, DECK_SIZE,
    GameRng, GameRngState,
    Deck, create_deck, shuffle,
    GameOptions,
    DeckError, EngineError,
};

pub use crate::zones::{PileId, Piles, TABLEAU_PILES};

pub use crate::rules::{DrawOutcome, MoveOutcome, SelectOutcome};

pub use crate::engine::{
    FoundationView, GameEvent, Layout, SelectTarget, Selection, Snapshot, Solitaire,
};
