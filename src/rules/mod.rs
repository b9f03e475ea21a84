//! Klondike rules.
//!
//! Pure legality predicates plus the outcome types every engine command
//! reports. Rejected moves are outcomes, not errors.

pub mod legality;

pub use legality::{
    can_place_on_foundation, can_place_on_tableau, can_stack_on, is_selectable_run,
    is_valid_foundation, DrawOutcome, MoveOutcome, SelectOutcome,
};
