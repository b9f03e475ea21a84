//! Pile storage for cards in play.
//!
//! `Piles` owns every card location in a game:
//! - `stock` and `waste` (top = last element)
//! - seven tableau piles (top = last element)
//! - four foundations indexed by suit (ascending from the Ace)
//!
//! Piles are `im::Vector`s, so cloning the whole layout for a snapshot is
//! O(1) and structural sharing keeps later mutations cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, Suit, NUM_RANKS, NUM_SUITS};

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Cards lifted off a pile in one move. A run never exceeds 13 cards.
pub type Run = SmallVec<[Card; NUM_RANKS]>;

/// Identifies one pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    Tableau(usize),
    Foundation(Suit),
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => f.write_str("stock"),
            PileId::Waste => f.write_str("waste"),
            PileId::Tableau(i) => write!(f, "tableau {}", i),
            PileId::Foundation(suit) => write!(f, "foundation {}", suit),
        }
    }
}

/// All piles of a Klondike layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    stock: Vector<Card>,
    waste: Vector<Card>,
    tableau: [Vector<Card>; TABLEAU_PILES],
    foundations: [Vector<Card>; NUM_SUITS],
}

impl Piles {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a pile. `None` for an out-of-range tableau index.
    #[must_use]
    pub fn get(&self, pile: PileId) -> Option<&Vector<Card>> {
        match pile {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Tableau(i) => self.tableau.get(i),
            PileId::Foundation(suit) => Some(&self.foundations[suit.index()]),
        }
    }

    fn get_mut(&mut self, pile: PileId) -> Option<&mut Vector<Card>> {
        match pile {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Tableau(i) => self.tableau.get_mut(i),
            PileId::Foundation(suit) => Some(&mut self.foundations[suit.index()]),
        }
    }

    #[must_use]
    pub fn stock(&self) -> &Vector<Card> {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Vector<Card> {
        &self.waste
    }

    #[must_use]
    pub fn tableau(&self) -> &[Vector<Card>; TABLEAU_PILES] {
        &self.tableau
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Vector<Card> {
        &self.foundations[suit.index()]
    }

    /// Number of cards in a pile (0 for an unknown pile).
    #[must_use]
    pub fn pile_size(&self, pile: PileId) -> usize {
        self.get(pile).map_or(0, Vector::len)
    }

    /// Get the top card of a pile.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        self.get(pile)?.last()
    }

    /// Put a card on top of a pile.
    ///
    /// Returns `false` (and drops nothing) if the pile does not exist.
    pub fn push(&mut self, pile: PileId, card: Card) -> bool {
        match self.get_mut(pile) {
            Some(cards) => {
                cards.push_back(card);
                true
            }
            None => false,
        }
    }

    /// Remove and return the top card of a pile.
    pub fn pop_top(&mut self, pile: PileId) -> Option<Card> {
        self.get_mut(pile)?.pop_back()
    }

    /// Lift the top `count` cards off a pile, preserving their order.
    ///
    /// Returns `None` without mutating if the pile is missing or shorter
    /// than `count`.
    pub fn take_top(&mut self, pile: PileId, count: usize) -> Option<Run> {
        let cards = self.get_mut(pile)?;
        if count > cards.len() {
            return None;
        }
        let at = cards.len() - count;
        let run = cards.split_off(at);
        Some(run.into_iter().collect())
    }

    /// Put a run of cards on top of a pile, bottom card first.
    pub fn extend(&mut self, pile: PileId, run: impl IntoIterator<Item = Card>) -> bool {
        match self.get_mut(pile) {
            Some(cards) => {
                cards.extend(run);
                true
            }
            None => false,
        }
    }

    /// Remove every card from a pile, returning them bottom to top.
    pub fn take_all(&mut self, pile: PileId) -> Vector<Card> {
        self.get_mut(pile).map(std::mem::take).unwrap_or_default()
    }

    /// Replace a pile's contents wholesale.
    pub fn replace(&mut self, pile: PileId, cards: Vector<Card>) -> bool {
        match self.get_mut(pile) {
            Some(slot) => {
                *slot = cards;
                true
            }
            None => false,
        }
    }

    /// Turn the top card of a pile face-up.
    ///
    /// Returns the card if it was face-down before.
    pub fn reveal_top(&mut self, pile: PileId) -> Option<Card> {
        let top = self.get_mut(pile)?.back_mut()?;
        if top.is_face_up() {
            return None;
        }
        top.set_face_up(true);
        Some(*top)
    }

    /// Insert a card into its suit's foundation at its rank position.
    ///
    /// Keeps the foundation sorted ascending whatever order cards arrive in.
    pub fn insert_ranked(&mut self, card: Card) {
        let foundation = &mut self.foundations[card.suit().index()];
        let at = foundation
            .iter()
            .position(|c| c.rank() > card.rank())
            .unwrap_or(foundation.len());
        foundation.insert(at, card.revealed());
    }

    /// Every tableau card is face-up.
    #[must_use]
    pub fn tableau_revealed(&self) -> bool {
        self.tableau
            .iter()
            .all(|pile| pile.iter().all(Card::is_face_up))
    }

    /// All four foundations hold a full suit.
    #[must_use]
    pub fn foundations_complete(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == NUM_RANKS)
    }

    /// Iterate over every card in every pile.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.tableau.iter().flat_map(|p| p.iter()))
            .chain(self.foundations.iter().flat_map(|f| f.iter()))
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.tableau.iter().map(Vector::len).sum::<usize>()
            + self.foundations.iter().map(Vector::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Rank;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::face_up(suit, rank)
    }

    #[test]
    fn test_push_and_top() {
        let mut piles = Piles::new();
        assert!(piles.push(PileId::Waste, card(Suit::Spades, Rank::Ace)));
        assert!(piles.push(PileId::Waste, card(Suit::Hearts, Rank::Two)));

        assert_eq!(piles.pile_size(PileId::Waste), 2);
        assert_eq!(
            piles.top_card(PileId::Waste),
            Some(&card(Suit::Hearts, Rank::Two))
        );
    }

    #[test]
    fn test_out_of_range_tableau() {
        let mut piles = Piles::new();
        assert!(piles.get(PileId::Tableau(7)).is_none());
        assert!(!piles.push(PileId::Tableau(7), card(Suit::Spades, Rank::Ace)));
        assert_eq!(piles.pile_size(PileId::Tableau(99)), 0);
        assert_eq!(piles.total_cards(), 0);
    }

    #[test]
    fn test_pop_top() {
        let mut piles = Piles::new();
        piles.push(PileId::Stock, card(Suit::Clubs, Rank::Five));
        piles.push(PileId::Stock, card(Suit::Clubs, Rank::Six));

        assert_eq!(
            piles.pop_top(PileId::Stock),
            Some(card(Suit::Clubs, Rank::Six))
        );
        assert_eq!(
            piles.pop_top(PileId::Stock),
            Some(card(Suit::Clubs, Rank::Five))
        );
        assert_eq!(piles.pop_top(PileId::Stock), None);
    }

    #[test]
    fn test_take_top_preserves_order() {
        let mut piles = Piles::new();
        let pile = PileId::Tableau(2);
        for rank in [Rank::King, Rank::Queen, Rank::Jack] {
            piles.push(pile, card(Suit::Spades, rank));
        }

        let run = piles.take_top(pile, 2).unwrap();
        assert_eq!(
            run.as_slice(),
            &[card(Suit::Spades, Rank::Queen), card(Suit::Spades, Rank::Jack)]
        );
        assert_eq!(piles.pile_size(pile), 1);

        assert!(piles.take_top(pile, 2).is_none());
        assert_eq!(piles.pile_size(pile), 1);
    }

    #[test]
    fn test_reveal_top() {
        let mut piles = Piles::new();
        let pile = PileId::Tableau(0);
        piles.push(pile, Card::new(Suit::Diamonds, Rank::Four));

        assert_eq!(
            piles.reveal_top(pile),
            Some(card(Suit::Diamonds, Rank::Four))
        );
        assert_eq!(piles.reveal_top(pile), None);
        assert!(piles.tableau_revealed());
    }

    #[test]
    fn test_insert_ranked() {
        let mut piles = Piles::new();
        for rank in [Rank::Three, Rank::Ace, Rank::King, Rank::Two] {
            piles.insert_ranked(Card::new(Suit::Hearts, rank));
        }
        let ranks: Vec<_> = piles
            .foundation(Suit::Hearts)
            .iter()
            .map(Card::rank)
            .collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Two, Rank::Three, Rank::King]);
        assert!(piles.foundation(Suit::Hearts).iter().all(Card::is_face_up));
    }

    #[test]
    fn test_take_all() {
        let mut piles = Piles::new();
        piles.push(PileId::Waste, card(Suit::Spades, Rank::Ace));
        piles.push(PileId::Waste, card(Suit::Spades, Rank::Two));

        let taken = piles.take_all(PileId::Waste);
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0], card(Suit::Spades, Rank::Ace));
        assert!(piles.waste().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut piles = Piles::new();
        piles.push(PileId::Tableau(3), card(Suit::Clubs, Rank::Nine));
        let snapshot = piles.clone();

        piles.pop_top(PileId::Tableau(3));
        assert_eq!(snapshot.pile_size(PileId::Tableau(3)), 1);
        assert_eq!(piles.pile_size(PileId::Tableau(3)), 0);
    }

    #[test]
    fn test_pile_id_display() {
        assert_eq!(PileId::Tableau(4).to_string(), "tableau 4");
        assert_eq!(PileId::Foundation(Suit::Spades).to_string(), "foundation ♠");
    }
}
