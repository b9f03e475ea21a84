//! The solitaire engine.
//!
//! `Solitaire` owns every pile, the current selection and the pending
//! event queue. All mutation goes through its command methods; each
//! command either completes or reports a rejection without touching state.
//!
//! Events accumulate until [`Solitaire::drain_events`] takes them. A front
//! end that only renders snapshots may ignore them: the queue is bounded
//! by [`EVENT_QUEUE_CAP`] and sheds its oldest entries once full.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::GameOptions;
//! use klondike_engine::engine::{SelectTarget, Solitaire};
//!
//! let mut game = Solitaire::new(GameOptions::default().with_seed(42));
//! assert_eq!(game.piles().stock().len(), 24);
//!
//! game.draw_card();
//! game.select(SelectTarget::Waste);
//! let _ = game.move_to_pile(0);
//! ```

use im::Vector;
use log::{debug, trace};

use super::event::GameEvent;
use super::layout::Layout;
use super::selection::{SelectTarget, Selection};
use crate::core::card::{Card, Suit};
use crate::core::config::GameOptions;
use crate::core::deck::Deck;
use crate::core::error::EngineError;
use crate::rules::{
    can_place_on_foundation, can_place_on_tableau, is_selectable_run, DrawOutcome, MoveOutcome,
    SelectOutcome,
};
use crate::zones::{PileId, Piles, TABLEAU_PILES};

/// Most events held between drains.
pub const EVENT_QUEUE_CAP: usize = 1024;

/// A Klondike game in progress.
#[derive(Clone, Debug)]
pub struct Solitaire {
    pub(super) piles: Piles,
    pub(super) selection: Option<Selection>,
    /// `None` when the cards did not come from a seeded shuffle.
    seed: Option<i64>,
    options: GameOptions,
    events: Vec<GameEvent>,
}

impl Solitaire {
    /// Start a game with the given options.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        let mut game = Self {
            piles: Piles::new(),
            selection: None,
            seed: None,
            options: GameOptions::default(),
            events: Vec::new(),
        };
        game.new_game(options);
        game
    }

    /// Start a game from an explicit deck order instead of a seed.
    ///
    /// The deck is dealt exactly as a shuffled one would be: cards come
    /// off the end of `cards`. Any seed in `options` is dropped, since it
    /// would not reproduce this deal.
    pub fn with_deck(cards: Vec<Card>, options: GameOptions) -> Result<Self, EngineError> {
        let deck = Deck::from_cards(cards)?;
        let mut game = Self {
            piles: Piles::new(),
            selection: None,
            seed: None,
            options: GameOptions { seed: None, ..options },
            events: Vec::new(),
        };
        game.deal(deck);
        Ok(game)
    }

    /// Build a game from an explicit layout. The game has no seed.
    pub fn from_layout(layout: Layout) -> Result<Self, EngineError> {
        let piles = layout.into_piles()?;
        Ok(Self {
            piles,
            selection: None,
            seed: None,
            options: GameOptions::default(),
            events: Vec::new(),
        })
    }

    /// Throw away the current game and deal a new one.
    pub fn new_game(&mut self, options: GameOptions) {
        let seed = options.resolve_seed();
        self.seed = Some(seed);
        self.options = options;
        self.deal(Deck::new(seed));
        debug!("new game, seed {}", seed);
    }

    /// Deal `deck` into the classic triangle and leave the rest as stock.
    fn deal(&mut self, mut deck: Deck) {
        let mut tableau: [Vec<Card>; TABLEAU_PILES] = Default::default();
        for round in 0..TABLEAU_PILES {
            for pile in tableau.iter_mut().skip(round) {
                if let Some(card) = deck.pop() {
                    pile.push(card);
                }
            }
        }

        let mut piles = Piles::new();
        for (i, cards) in tableau.into_iter().enumerate() {
            let last = cards.len().saturating_sub(1);
            let all_face_up = self.options.all_face_up;
            piles.extend(
                PileId::Tableau(i),
                cards.into_iter().enumerate().map(|(pos, mut card)| {
                    card.set_face_up(all_face_up || pos == last);
                    card
                }),
            );
        }
        piles.extend(PileId::Stock, deck.into_cards().into_iter().map(Card::hidden));

        self.piles = piles;
        self.selection = None;
        // Events from the previous game describe piles that no longer exist.
        if !self.events.is_empty() {
            debug!("discarding {} undrained events", self.events.len());
            self.events.clear();
        }
        self.emit(GameEvent::NewGame { seed: self.seed });
    }

    // === Accessors ===

    /// The seed this game was dealt from, as supplied.
    ///
    /// `None` for games built from an explicit deck or layout; passing a
    /// seed back to [`Solitaire::new`] always replays the same deal.
    #[must_use]
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Cards of a tableau pile, bottom to top.
    pub fn tableau_pile(&self, index: usize) -> Result<&Vector<Card>, EngineError> {
        self.piles
            .get(PileId::Tableau(index))
            .ok_or(EngineError::PileOutOfRange {
                index,
                count: TABLEAU_PILES,
            })
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Vector<Card> {
        self.piles.foundation(suit)
    }

    /// Peek at queued events without clearing them.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queue an event, shedding the oldest half of the queue when full.
    pub(super) fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= EVENT_QUEUE_CAP {
            let dropped = EVENT_QUEUE_CAP / 2;
            self.events.drain(..dropped);
            trace!("event queue full, dropped {} oldest events", dropped);
        }
        self.events.push(event);
    }

    // === Commands ===

    /// Draw from the stock, or recycle the waste when the stock is empty.
    pub fn draw_card(&mut self) -> DrawOutcome {
        if let Some(card) = self.piles.pop_top(PileId::Stock) {
            let card = card.revealed();
            self.piles.push(PileId::Waste, card);
            // The old waste top is no longer on top.
            if self.selection == Some(Selection::Waste) {
                self.selection = None;
            }
            self.emit(GameEvent::CardDrawn { card });
            trace!("drew {}", card);
            return DrawOutcome::Drew(card);
        }

        if self.piles.waste().is_empty() {
            return DrawOutcome::Empty;
        }

        let waste = self.piles.take_all(PileId::Waste);
        let count = waste.len();
        let stock: Vector<Card> = waste.iter().rev().map(|c| c.hidden()).collect();
        self.piles.replace(PileId::Stock, stock);
        self.selection = None;
        self.emit(GameEvent::StockRecycled { count });
        debug!("recycled {} waste cards into stock", count);
        DrawOutcome::Recycled { count }
    }

    /// Select cards, toggle off the current selection, or reject.
    pub fn select(&mut self, target: SelectTarget) -> SelectOutcome {
        let Some(requested) = self.resolve_target(target) else {
            trace!("rejected selection {:?}", target);
            return SelectOutcome::Rejected;
        };

        if self.selection == Some(requested) {
            self.selection = None;
            SelectOutcome::Deselected
        } else {
            self.selection = Some(requested);
            SelectOutcome::Selected
        }
    }

    /// Clear any selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    fn resolve_target(&self, target: SelectTarget) -> Option<Selection> {
        match target {
            SelectTarget::Tableau { pile, offset } => {
                let cards = self.piles.get(PileId::Tableau(pile))?;
                if offset >= cards.len() || !is_selectable_run(cards.iter().skip(offset)) {
                    return None;
                }
                Some(Selection::Tableau {
                    pile,
                    count: cards.len() - offset,
                })
            }
            SelectTarget::Waste => self
                .piles
                .top_card(PileId::Waste)
                .filter(|c| c.is_face_up())
                .map(|_| Selection::Waste),
            SelectTarget::Foundation { suit } => self
                .piles
                .top_card(PileId::Foundation(suit))
                .map(|_| Selection::Foundation { suit }),
        }
    }

    /// Bottom card of the selected run, if the selection is still valid.
    fn leading_card(&self, selection: &Selection) -> Option<Card> {
        let cards = self.piles.get(selection.source())?;
        let count = selection.count();
        if count == 0 || count > cards.len() {
            return None;
        }
        let start = cards.len() - count;
        if !is_selectable_run(cards.iter().skip(start)) {
            return None;
        }
        cards.get(start).copied()
    }

    /// Move the selected run onto tableau pile `target`.
    pub fn move_to_pile(&mut self, target: usize) -> MoveOutcome {
        let Some(selection) = self.selection else {
            return MoveOutcome::NoSelection;
        };
        let to = PileId::Tableau(target);
        let from = selection.source();
        if from == to {
            return MoveOutcome::Illegal;
        }
        let Some(dest) = self.piles.get(to) else {
            return MoveOutcome::Illegal;
        };
        let Some(leading) = self.leading_card(&selection) else {
            return MoveOutcome::Illegal;
        };
        if !can_place_on_tableau(&leading, dest.last()) {
            return MoveOutcome::Illegal;
        }

        let Some(run) = self.piles.take_top(from, selection.count()) else {
            return MoveOutcome::Illegal;
        };
        let count = run.len();
        self.piles.extend(to, run);
        self.reveal_source(from);
        self.selection = None;
        self.emit(GameEvent::CardsMoved { from, to, count });
        trace!("moved {} card(s) from {} to {}", count, from, to);

        if matches!(from, PileId::Tableau(_)) && self.check_win() {
            self.auto_solve();
        }
        MoveOutcome::Moved
    }

    /// Move the topmost selected card onto the `suit` foundation.
    pub fn move_to_foundation(&mut self, suit: Suit) -> MoveOutcome {
        let Some(selection) = self.selection else {
            return MoveOutcome::NoSelection;
        };
        let from = selection.source();
        let to = PileId::Foundation(suit);
        let Some(card) = self.piles.top_card(from).copied() else {
            return MoveOutcome::Illegal;
        };
        if !card.is_face_up() || !can_place_on_foundation(&card, suit, self.piles.foundation(suit).last()) {
            return MoveOutcome::Illegal;
        }

        let Some(card) = self.piles.pop_top(from) else {
            return MoveOutcome::Illegal;
        };
        self.piles.push(to, card);
        self.reveal_source(from);
        self.selection = None;
        self.emit(GameEvent::CardsMoved { from, to, count: 1 });
        trace!("moved {} to {}", card, to);
        MoveOutcome::Moved
    }

    /// Turn up the new top of a tableau pile that just lost cards.
    fn reveal_source(&mut self, from: PileId) {
        if let PileId::Tableau(pile) = from {
            if let Some(card) = self.piles.reveal_top(from) {
                self.emit(GameEvent::CardRevealed { pile, card });
            }
        }
    }

    // === Game status ===

    /// Every tableau card is face-up, so the rest of the game is mechanical.
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.piles.tableau_revealed()
    }

    /// All 52 cards sit on the foundations.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.piles.foundations_complete()
    }
}
