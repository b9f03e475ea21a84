//! Move legality and command outcomes.
//!
//! The predicates here are pure: they look at cards and never touch pile
//! state. The engine checks them before mutating anything, which is what
//! makes a rejected move leave the game untouched.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank, Suit};

/// Result of a move command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The cards moved.
    Moved,
    /// A selection exists but the move breaks the rules. Nothing changed.
    Illegal,
    /// Nothing was selected.
    NoSelection,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_moved(self) -> bool {
        self == MoveOutcome::Moved
    }
}

/// Result of a selection command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// A new selection is active.
    Selected,
    /// The same anchor was selected again; selection cleared.
    Deselected,
    /// Locator invalid or cards not selectable. Prior selection kept.
    Rejected,
}

/// Result of drawing from the stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// One card moved from stock to waste.
    Drew(Card),
    /// The waste was turned over into the stock.
    Recycled { count: usize },
    /// Stock and waste were both empty.
    Empty,
}

/// Can `moving` be placed on `target` in the tableau?
///
/// Requires opposite colours and `moving` exactly one rank below `target`.
#[must_use]
pub fn can_stack_on(moving: &Card, target: &Card) -> bool {
    moving.is_red() != target.is_red() && moving.rank().next() == Some(target.rank())
}

/// Can a run led by `leading` go onto a tableau pile whose top is `target`?
///
/// Only a King may start an empty pile.
#[must_use]
pub fn can_place_on_tableau(leading: &Card, target: Option<&Card>) -> bool {
    match target {
        None => leading.rank() == Rank::King,
        Some(top) => can_stack_on(leading, top),
    }
}

/// Can `card` go onto the `suit` foundation whose top is `foundation_top`?
#[must_use]
pub fn can_place_on_foundation(card: &Card, suit: Suit, foundation_top: Option<&Card>) -> bool {
    if card.suit() != suit {
        return false;
    }
    match foundation_top {
        None => card.rank() == Rank::Ace,
        Some(top) => top.rank().next() == Some(card.rank()),
    }
}

/// Every card in the run is face-up.
#[must_use]
pub fn is_selectable_run<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    cards.into_iter().all(Card::is_face_up)
}

/// A foundation pile is a same-suit ascending sequence from the Ace.
#[must_use]
pub fn is_valid_foundation<'a>(suit: Suit, cards: impl IntoIterator<Item = &'a Card>) -> bool {
    cards
        .into_iter()
        .enumerate()
        .all(|(i, c)| c.suit() == suit && c.rank().index() == i)
}
