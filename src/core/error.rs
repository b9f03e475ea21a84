//! Error types for contract violations.
//!
//! Illegal moves are never errors; they are reported through the outcome
//! enums in `rules`. These types cover caller mistakes such as building a
//! deck with missing cards or indexing a pile that does not exist.

use super::card::Card;

/// Errors from building a deck out of caller-supplied cards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck must hold {expected} cards, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    #[error("card {0} appears more than once")]
    Duplicate(Card),
}

/// Errors from engine accessors and layout construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("tableau pile {index} out of range (0..{count})")]
    PileOutOfRange { index: usize, count: usize },
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_messages() {
        let err = DeckError::WrongSize {
            expected: 52,
            actual: 51,
        };
        assert_eq!(err.to_string(), "deck must hold 52 cards, got 51");

        let err = DeckError::Duplicate(Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(err.to_string(), "card A♥ appears more than once");

        let err = EngineError::PileOutOfRange { index: 9, count: 7 };
        assert_eq!(err.to_string(), "tableau pile 9 out of range (0..7)");
    }

    #[test]
    fn test_deck_error_converts() {
        let err: EngineError = DeckError::WrongSize {
            expected: 52,
            actual: 0,
        }
        .into();
        assert!(matches!(err, EngineError::Deck(_)));
    }
}
