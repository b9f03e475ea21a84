//! The Klondike engine: game state, commands, auto-solve and snapshots.
//!
//! ## Key Types
//!
//! - `Solitaire`: owns the piles and selection; all mutation goes through it
//! - `SelectTarget` / `Selection`: what the user asks for vs. what is held
//! - `Layout`: explicit pile contents for tools and tests
//! - `Snapshot`: read-only state for renderers
//! - `GameEvent`: queued notifications, including `Solved`

pub mod solitaire;
pub mod selection;
pub mod layout;
pub mod autosolve;
pub mod snapshot;
pub mod event;

pub use solitaire::{Solitaire, EVENT_QUEUE_CAP};
pub use selection::{SelectTarget, Selection};
pub use layout::Layout;
pub use snapshot::{FoundationView, Snapshot};
pub use event::GameEvent;
