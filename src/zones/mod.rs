//! Pile storage for card locations.
//!
//! ## Key Types
//!
//! - `PileId`: Typed pile address (stock, waste, tableau index, foundation suit)
//! - `Piles`: Card storage and movement primitives
//! - `Run`: Cards lifted off a pile together

pub mod piles;

pub use piles::{PileId, Piles, Run, TABLEAU_PILES};
