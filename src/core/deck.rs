//! Deck construction and seeded shuffling.
//!
//! The canonical deck is suit-major, rank-minor: A♠ … K♠, A♣ … K♣,
//! A♥ … K♥, A♦ … K♦, all face-down. Shuffling is a backward
//! Fisher–Yates pass driven by [`GameRng`], so a seed fully determines
//! the resulting order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit, DECK_SIZE};
use super::error::DeckError;
use super::rng::{normalize_seed, GameRng};

/// Build the 52 cards in canonical order, all face-down.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Shuffle `cards` in place with a fresh generator seeded from `seed`.
///
/// For `i` from the last index down to 1, draws `j` uniformly in `[0, i]`
/// and swaps `i` and `j`.
pub fn shuffle(cards: &mut [Card], seed: u32) {
    let mut rng = GameRng::new(seed);
    shuffle_with(cards, &mut rng);
}

/// Shuffle with a caller-owned generator.
pub fn shuffle_with<T>(items: &mut [T], rng: &mut GameRng) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// An ordered, validated 52-card deck.
///
/// Index 0 is the bottom; the last card is the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Canonical deck shuffled with `seed` (any integer, normalized to 32 bits).
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut cards = create_deck();
        shuffle(&mut cards, normalize_seed(seed));
        Self { cards }
    }

    /// Canonical, unshuffled deck.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            cards: create_deck(),
        }
    }

    /// Build a deck from an explicit order.
    ///
    /// Fails unless the cards are exactly the 52 distinct `(suit, rank)`
    /// pairs. Face-up flags are preserved.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        validate_permutation(&cards)?;
        Ok(Self { cards })
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Consume the deck, returning its cards bottom to top.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Check that `cards` is a permutation of the full deck.
pub fn validate_permutation(cards: &[Card]) -> Result<(), DeckError> {
    if cards.len() != DECK_SIZE {
        return Err(DeckError::WrongSize {
            expected: DECK_SIZE,
            actual: cards.len(),
        });
    }
    let mut seen = FxHashSet::default();
    for card in cards {
        if !seen.insert(card.id()) {
            return Err(DeckError::Duplicate(card.hidden()));
        }
    }
    Ok(())
}
