//! Selection state.
//!
//! A selection is always one of three shapes, and move logic matches on
//! them exhaustively. `SelectTarget` is what a front end asks for;
//! `Selection` is what the engine records once the request checks out.

use serde::{Deserialize, Serialize};

use crate::core::card::Suit;
use crate::zones::PileId;

/// A user request to select cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectTarget {
    /// The card at `offset` in tableau `pile` and everything above it.
    Tableau { pile: usize, offset: usize },
    /// The top waste card.
    Waste,
    /// The top card of a foundation.
    Foundation { suit: Suit },
}

/// The active selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// The top `count` cards of tableau `pile`.
    Tableau { pile: usize, count: usize },
    /// The top waste card.
    Waste,
    /// The top card of the `suit` foundation.
    Foundation { suit: Suit },
}

impl Selection {
    /// The pile the selected cards sit on.
    #[must_use]
    pub fn source(&self) -> PileId {
        match *self {
            Selection::Tableau { pile, .. } => PileId::Tableau(pile),
            Selection::Waste => PileId::Waste,
            Selection::Foundation { suit } => PileId::Foundation(suit),
        }
    }

    /// Number of selected cards.
    #[must_use]
    pub fn count(&self) -> usize {
        match *self {
            Selection::Tableau { count, .. } => count,
            Selection::Waste | Selection::Foundation { .. } => 1,
        }
    }
}
