//! Where cards live outside of hands.
//!
//! - `Deck`: face-down draw pile, top first
//! - `DiscardPile`: face-up history of every discarded card and who discarded it

pub mod deck;
pub mod discard;

pub use deck::Deck;
pub use discard::{Discard, DiscardPile};
