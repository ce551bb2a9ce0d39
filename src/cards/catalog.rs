//! Card catalog - the ten card kinds and their static data.
//!
//! Every kind has a fixed rank (0-9, strictly increasing in declaration
//! order), a default number of copies in the deck, and display text.
//! Behavior lives in `effects::EffectResolver`, dispatched once on the kind.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the ten card kinds.
///
/// Declaration order is rank order, so the derived `Ord` compares by rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Spy,
    Guard,
    Priest,
    Baron,
    Handmaid,
    Prince,
    Chancellor,
    King,
    Countess,
    Princess,
}

impl CardKind {
    /// All kinds in rank order.
    pub const ALL: [CardKind; 10] = [
        CardKind::Spy,
        CardKind::Guard,
        CardKind::Priest,
        CardKind::Baron,
        CardKind::Handmaid,
        CardKind::Prince,
        CardKind::Chancellor,
        CardKind::King,
        CardKind::Countess,
        CardKind::Princess,
    ];

    /// Rank used for Baron comparisons and the end-of-deck showdown.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Number of copies in the standard deck.
    ///
    /// Guard has 6 copies; some variants of the rules use 5, which can be
    /// configured through `DeckComposition`.
    #[must_use]
    pub const fn count_in_deck(self) -> usize {
        match self {
            CardKind::Guard => 6,
            CardKind::King | CardKind::Countess | CardKind::Princess => 1,
            _ => 2,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Spy => "Spy",
            CardKind::Guard => "Guard",
            CardKind::Priest => "Priest",
            CardKind::Baron => "Baron",
            CardKind::Handmaid => "Handmaid",
            CardKind::Prince => "Prince",
            CardKind::Chancellor => "Chancellor",
            CardKind::King => "King",
            CardKind::Countess => "Countess",
            CardKind::Princess => "Princess",
        }
    }

    /// Rules text shown to players. Display only.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CardKind::Spy => "No effect.",
            CardKind::Guard => {
                "Name a card other than Guard and choose another player. \
                 If that player holds the named card, they are out of the round."
            }
            CardKind::Priest => "Choose another player and look at their hand.",
            CardKind::Baron => {
                "Choose another player and privately compare hands. \
                 The player with the lower card is out of the round."
            }
            CardKind::Handmaid => {
                "Until the start of your next turn, other players cannot choose you for their card effects."
            }
            CardKind::Prince => {
                "Choose any player, including yourself. That player discards their hand \
                 and draws a new card."
            }
            CardKind::Chancellor => {
                "Draw two cards. Keep one card from your hand and put the others \
                 on the bottom of the deck in any order."
            }
            CardKind::King => "Choose another player and trade hands with them.",
            CardKind::Countess => {
                "If you hold this card alongside the King or Prince, you must play this card."
            }
            CardKind::Princess => "If you play or discard this card, you are out of the round.",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a typed name matches no card kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCardKind(pub String);

impl std::fmt::Display for UnknownCardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown card kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownCardKind {}

impl FromStr for CardKind {
    type Err = UnknownCardKind;

    /// Parse a case-insensitive card name, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CardKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCardKind(s.to_string()))
    }
}
