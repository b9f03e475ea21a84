//! Card, suit and rank types for a standard 52-card deck.
//!
//! A `Card` is an immutable `(suit, rank)` pair plus a mutable face-up flag.
//! Ranks are ordered Ace (0) through King (12); that order drives every
//! adjacency check in the rules.

use serde::{Deserialize, Serialize};

/// Number of suits in a deck.
pub const NUM_SUITS: usize = 4;
/// Number of ranks per suit.
pub const NUM_RANKS: usize = 13;
/// Number of cards in a deck.
pub const DECK_SIZE: usize = NUM_SUITS * NUM_RANKS;

/// Card suit.
///
/// Declaration order is the canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    /// Position in canonical order (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit at a canonical position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in the rank order (A=0 … K=12).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank at a position in the rank order.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The rank directly above this one. `None` for King.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Short label ("A", "2", …, "10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Equality includes the face-up flag. Use [`Card::id`] to compare
/// identity regardless of orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Stable identity in 0..52: `suit * 13 + rank`.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.suit.index() * NUM_RANKS + self.rank.index()
    }

    /// Set the face-up flag.
    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Copy of this card turned face-up.
    #[must_use]
    pub const fn revealed(self) -> Self {
        Self::face_up(self.suit, self.rank)
    }

    /// Copy of this card turned face-down.
    #[must_use]
    pub const fn hidden(self) -> Self {
        Self::new(self.suit, self.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new(Suit::Hearts, Rank::Seven);
        assert_eq!(card.suit(), Suit::Hearts);
        assert_eq!(card.rank(), Rank::Seven);
        assert!(!card.is_face_up());
        assert!(card.revealed().is_face_up());
    }

    #[test]
    fn test_colors() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn test_rank_order() {
        assert_eq!(Rank::Ace.index(), 0);
        assert_eq!(Rank::King.index(), 12);
        assert_eq!(Rank::Nine.next(), Some(Rank::Ten));
        assert_eq!(Rank::King.next(), None);
        assert!(Rank::Jack < Rank::Queen);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = [false; DECK_SIZE];
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let id = Card::new(suit, rank).id();
                assert!(!seen[id]);
                seen[id] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_id_ignores_orientation() {
        let card = Card::new(Suit::Clubs, Rank::Queen);
        assert_eq!(card.id(), card.revealed().id());
        assert_ne!(card, card.revealed());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ten).to_string(), "10♦");
    }
}
