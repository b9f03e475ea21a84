//! Automatic resolution of a won game.
//!
//! Once every tableau card is face-up no decision is left to make, so the
//! engine moves everything home in one pass.

use log::debug;

use super::event::GameEvent;
use super::solitaire::Solitaire;
use crate::zones::{PileId, TABLEAU_PILES};

impl Solitaire {
    /// Move every remaining card to its foundation.
    ///
    /// Only runs when [`check_win`](Self::check_win) holds and the game is
    /// not already solved; otherwise returns `false` and changes nothing.
    ///
    /// Drain order is tableau piles 0..7 bottom to top, then the waste
    /// bottom to top, then any stock bottom to top. Each card is placed at
    /// its rank position, so every foundation ends as A..K of its suit.
    /// Queues exactly one [`GameEvent::Solved`].
    pub fn auto_solve(&mut self) -> bool {
        if !self.check_win() || self.is_solved() {
            return false;
        }

        let sources = (0..TABLEAU_PILES)
            .map(PileId::Tableau)
            .chain([PileId::Waste, PileId::Stock]);

        let mut moved = 0;
        for pile in sources {
            for card in self.piles.take_all(pile) {
                self.piles.insert_ranked(card);
                moved += 1;
            }
        }

        self.selection = None;
        self.emit(GameEvent::Solved);
        debug!("auto-solve moved {} cards to the foundations", moved);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::core::card::{Card, Rank, Suit, NUM_RANKS};
    use crate::core::config::GameOptions;
    use crate::engine::event::GameEvent;
    use crate::engine::Solitaire;

    #[test]
    fn test_refuses_with_hidden_cards() {
        let mut game = Solitaire::new(GameOptions::default().with_seed(42));
        let before = game.piles().clone();
        assert!(!game.auto_solve());
        assert_eq!(game.piles(), &before);
    }

    #[test]
    fn test_solves_face_up_deal() {
        let mut game = Solitaire::new(GameOptions::default().with_seed(42).with_all_face_up(true));
        game.draw_card();
        game.draw_card();
        assert!(game.auto_solve());
        assert!(game.is_solved());

        for suit in Suit::ALL {
            let ranks: Vec<Rank> = game.foundation(suit).iter().map(Card::rank).collect();
            assert_eq!(ranks, Rank::ALL.to_vec());
            assert_eq!(game.foundation(suit).len(), NUM_RANKS);
        }

        let solved = game.events().iter().filter(|e| e.is_solved()).count();
        assert_eq!(solved, 1);
        assert_eq!(game.events().last(), Some(&GameEvent::Solved));
    }

    #[test]
    fn test_second_call_is_noop() {
        let mut game = Solitaire::new(GameOptions::default().with_seed(1).with_all_face_up(true));
        assert!(game.auto_solve());
        game.drain_events();
        assert!(!game.auto_solve());
        assert!(game.events().is_empty());
    }
}
