//! Card instances.
//!
//! Cards carry no identity beyond their kind: two Guards are the same card
//! for every rule in the game, so `Card` is a `Copy` newtype over `CardKind`.

use serde::{Deserialize, Serialize};

use super::catalog::CardKind;

/// A single physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub CardKind);

impl Card {
    /// Create a card of the given kind.
    #[must_use]
    pub const fn new(kind: CardKind) -> Self {
        Self(kind)
    }

    /// The card's kind.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        self.0
    }

    /// Shorthand for `self.kind().rank()`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0.rank()
    }

    #[must_use]
    pub fn is(self, kind: CardKind) -> bool {
        self.0 == kind
    }
}

impl From<CardKind> for Card {
    fn from(kind: CardKind) -> Self {
        Self(kind)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.0.name(), self.0.rank())
    }
}
