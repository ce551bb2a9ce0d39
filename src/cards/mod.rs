//! The card catalog and physical cards.
//!
//! ## Key Types
//!
//! - `CardKind`: the ten kinds, with rank, deck count and rule text
//! - `Card`: one physical card, identified only by its kind
//! - `DeckComposition`: how many of each kind a deck is built from

pub mod catalog;
pub mod card;
pub mod composition;

pub use catalog::{CardKind, UnknownCardKind};
pub use card::Card;
pub use composition::DeckComposition;
