//! Game events.
//!
//! The engine queues an event for every state change a presentation layer
//! may want to react to. Events carry just enough to describe the change;
//! the authoritative state is always the next `Snapshot`.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::zones::PileId;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new deal with the given (un-normalized) seed, or `None` for an
    /// explicit deck order.
    NewGame { seed: Option<i64> },
    /// A card moved from stock to waste.
    CardDrawn { card: Card },
    /// The waste was turned over into the stock.
    StockRecycled { count: usize },
    /// Cards moved between piles.
    CardsMoved { from: PileId, to: PileId, count: usize },
    /// A face-down tableau card was turned up.
    CardRevealed { pile: usize, card: Card },
    /// Auto-solve finished; every card is on a foundation.
    Solved,
}

impl GameEvent {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, GameEvent::Solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_is_solved() {
        assert!(GameEvent::Solved.is_solved());
        assert!(!GameEvent::NewGame { seed: Some(1) }.is_solved());
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::CardsMoved {
            from: PileId::Waste,
            to: PileId::Foundation(Suit::Hearts),
            count: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);

        let revealed = GameEvent::CardRevealed {
            pile: 2,
            card: Card::face_up(Suit::Spades, Rank::Four),
        };
        let json = serde_json::to_string(&revealed).unwrap();
        assert_eq!(serde_json::from_str::<GameEvent>(&json).unwrap(), revealed);
    }
}
