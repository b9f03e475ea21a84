//! Explicit pile layouts.
//!
//! A `Layout` describes every pile directly instead of dealing from a
//! seed. Tools and tests use it to set up exact positions; the engine
//! validates it so a layout can never smuggle in duplicated or missing
//! cards.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Suit, DECK_SIZE, NUM_SUITS};
use crate::core::deck::{create_deck, validate_permutation};
use crate::core::error::EngineError;
use crate::rules::is_valid_foundation;
use crate::zones::{PileId, Piles, TABLEAU_PILES};

/// Cards per pile, each listed bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub tableau: [Vec<Card>; TABLEAU_PILES],
    /// Indexed by `Suit::index()`.
    pub foundations: [Vec<Card>; NUM_SUITS],
    /// First tableau index passed to `with_tableau` that does not exist.
    #[serde(skip)]
    bad_pile: Option<usize>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tableau pile (builder pattern).
    ///
    /// An out-of-range `pile` is reported by [`Layout::into_piles`].
    #[must_use]
    pub fn with_tableau(mut self, pile: usize, cards: Vec<Card>) -> Self {
        match self.tableau.get_mut(pile) {
            Some(slot) => *slot = cards,
            None => {
                self.bad_pile.get_or_insert(pile);
            }
        }
        self
    }

    /// Set the waste (builder pattern).
    #[must_use]
    pub fn with_waste(mut self, cards: Vec<Card>) -> Self {
        self.waste = cards;
        self
    }

    /// Set a foundation (builder pattern).
    #[must_use]
    pub fn with_foundation(mut self, suit: Suit, cards: Vec<Card>) -> Self {
        self.foundations[suit.index()] = cards;
        self
    }

    /// Put every card not yet placed onto the stock, face-down, in
    /// canonical order.
    #[must_use]
    pub fn fill_stock(mut self) -> Self {
        let mut placed = [false; DECK_SIZE];
        for card in self.cards() {
            placed[card.id()] = true;
        }
        let missing: Vec<Card> = create_deck()
            .into_iter()
            .filter(|c| !placed[c.id()])
            .collect();
        self.stock.extend(missing);
        self
    }

    fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.tableau.iter().flatten())
            .chain(self.foundations.iter().flatten())
    }

    /// Check the layout and build piles from it.
    ///
    /// Stock cards are turned face-down, waste and foundation cards
    /// face-up, and the top card of every tableau pile face-up.
    pub fn into_piles(self) -> Result<Piles, EngineError> {
        if let Some(index) = self.bad_pile {
            return Err(EngineError::PileOutOfRange {
                index,
                count: TABLEAU_PILES,
            });
        }

        let all: Vec<Card> = self.cards().copied().collect();
        validate_permutation(&all).map_err(|e| EngineError::InvalidLayout(e.to_string()))?;

        for suit in Suit::ALL {
            if !is_valid_foundation(suit, &self.foundations[suit.index()]) {
                return Err(EngineError::InvalidLayout(format!(
                    "foundation {} is not an ascending run from the Ace",
                    suit
                )));
            }
        }

        for (i, pile) in self.tableau.iter().enumerate() {
            let first_up = pile.iter().position(Card::is_face_up).unwrap_or(pile.len());
            if pile[first_up..].iter().any(|c| !c.is_face_up()) {
                return Err(EngineError::InvalidLayout(format!(
                    "tableau {} has a face-down card above a face-up card",
                    i
                )));
            }
        }

        let mut piles = Piles::new();
        piles.extend(PileId::Stock, self.stock.into_iter().map(Card::hidden));
        piles.extend(PileId::Waste, self.waste.into_iter().map(Card::revealed));
        for (i, pile) in self.tableau.into_iter().enumerate() {
            piles.extend(PileId::Tableau(i), pile);
            piles.reveal_top(PileId::Tableau(i));
        }
        for (suit, cards) in Suit::ALL.into_iter().zip(self.foundations) {
            piles.extend(PileId::Foundation(suit), cards.into_iter().map(Card::revealed));
        }
        Ok(piles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Rank;

    #[test]
    fn test_fill_stock_completes_deck() {
        let layout = Layout::new()
            .with_tableau(0, vec![Card::face_up(Suit::Spades, Rank::King)])
            .fill_stock();
        assert_eq!(layout.stock.len(), DECK_SIZE - 1);

        let piles = layout.into_piles().unwrap();
        assert_eq!(piles.total_cards(), DECK_SIZE);
        assert!(piles.stock().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_rejects_duplicates() {
        let ace = Card::face_up(Suit::Spades, Rank::Ace);
        let layout = Layout::new()
            .with_tableau(0, vec![ace])
            .with_tableau(1, vec![ace])
            .fill_stock();
        assert!(matches!(
            layout.into_piles(),
            Err(EngineError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_rejects_incomplete() {
        let layout = Layout::new().with_tableau(0, vec![Card::face_up(Suit::Spades, Rank::Ace)]);
        assert!(layout.into_piles().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_tableau() {
        let king = Card::face_up(Suit::Spades, Rank::King);
        let layout = Layout::new()
            .with_tableau(9, vec![king])
            .with_tableau(TABLEAU_PILES, Vec::new())
            .with_tableau(0, vec![king])
            .fill_stock();
        assert_eq!(
            layout.into_piles(),
            Err(EngineError::PileOutOfRange { index: 9, count: TABLEAU_PILES })
        );
    }

    #[test]
    fn test_rejects_bad_foundation() {
        let layout = Layout::new()
            .with_foundation(Suit::Hearts, vec![Card::face_up(Suit::Hearts, Rank::Two)])
            .fill_stock();
        assert!(layout.into_piles().is_err());
    }

    #[test]
    fn test_rejects_hidden_card_above_visible() {
        let layout = Layout::new()
            .with_tableau(
                0,
                vec![
                    Card::face_up(Suit::Spades, Rank::Nine),
                    Card::new(Suit::Hearts, Rank::Eight),
                    Card::face_up(Suit::Clubs, Rank::Seven),
                ],
            )
            .fill_stock();
        assert!(layout.into_piles().is_err());
    }

    #[test]
    fn test_reveals_tableau_tops() {
        let layout = Layout::new()
            .with_tableau(
                2,
                vec![
                    Card::new(Suit::Spades, Rank::Nine),
                    Card::new(Suit::Hearts, Rank::Eight),
                ],
            )
            .fill_stock();
        let piles = layout.into_piles().unwrap();
        let pile = piles.get(PileId::Tableau(2)).unwrap();
        assert!(!pile[0].is_face_up());
        assert!(pile[1].is_face_up());
    }
}
