//! Read-only views for a presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::selection::Selection;
use super::solitaire::Solitaire;
use crate::core::card::{Card, Suit, NUM_SUITS};
use crate::zones::TABLEAU_PILES;

/// Top card and size of one foundation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationView {
    pub suit: Suit,
    pub top: Option<Card>,
    pub count: usize,
}

/// Everything a renderer needs after a command.
///
/// Tableau piles share structure with the engine, so taking a snapshot
/// does not copy cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Seed to replay this game with, if it was dealt from one.
    pub seed: Option<i64>,
    pub stock_count: usize,
    pub waste_count: usize,
    pub waste_top: Option<Card>,
    pub tableau: [Vector<Card>; TABLEAU_PILES],
    pub foundations: [FoundationView; NUM_SUITS],
    pub selection: Option<Selection>,
    pub won: bool,
}

impl Solitaire {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let piles = self.piles();
        Snapshot {
            seed: self.seed(),
            stock_count: piles.stock().len(),
            waste_count: piles.waste().len(),
            waste_top: piles.waste().last().copied(),
            tableau: piles.tableau().clone(),
            foundations: Suit::ALL.map(|suit| {
                let cards = piles.foundation(suit);
                FoundationView {
                    suit,
                    top: cards.last().copied(),
                    count: cards.len(),
                }
            }),
            selection: self.selection(),
            won: self.is_solved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameOptions;
    use crate::engine::SelectTarget;

    #[test]
    fn test_snapshot_of_fresh_deal() {
        let game = Solitaire::new(GameOptions::default().with_seed(42));
        let snap = game.snapshot();

        assert_eq!(snap.seed, Some(42));
        assert_eq!(snap.stock_count, 24);
        assert_eq!(snap.waste_count, 0);
        assert_eq!(snap.waste_top, None);
        assert!(snap.foundations.iter().all(|f| f.count == 0 && f.top.is_none()));
        for (i, pile) in snap.tableau.iter().enumerate() {
            assert_eq!(pile.len(), i + 1);
        }
        assert!(!snap.won);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut game = Solitaire::new(GameOptions::default().with_seed(42));
        let before = game.snapshot();
        game.draw_card();
        game.select(SelectTarget::Waste);

        assert_eq!(before.waste_count, 0);
        let after = game.snapshot();
        assert_eq!(after.waste_count, 1);
        assert_eq!(after.selection, Some(Selection::Waste));
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = Solitaire::new(GameOptions::default().with_seed(3));
        let snap = game.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
