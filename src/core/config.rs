//! Round configuration.
//!
//! The host describes a round once, up front:
//! - Seat order and display names
//! - RNG seed (fixed for replays/tests, or drawn from entropy)
//! - Deck composition
//! - Showdown tie-break policy
//!
//! The engine never hardcodes any of these beyond the catalog defaults.

use serde::{Deserialize, Serialize};

use crate::cards::DeckComposition;

/// How to settle a showdown when several players hold the same top rank
/// after the deck runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Every tied player wins.
    #[default]
    Shared,
    /// The tied player whose discards sum to the highest rank wins.
    /// Players still tied after that share the win.
    DiscardTotal,
}

/// Complete round configuration.
///
/// ## Example
///
/// ```
/// use love_letter::core::{RoundConfig, TieBreak};
///
/// let config = RoundConfig::new(["Ana", "Bo", "Cy"])
///     .with_seed(7)
///     .with_tie_break(TieBreak::DiscardTotal);
///
/// assert_eq!(config.player_count(), 3);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Display names in seat (turn) order.
    pub player_names: Vec<String>,

    /// Shuffle seed. `None` draws a seed from entropy at round creation.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Cards the deck is built from.
    #[serde(default)]
    pub composition: DeckComposition,

    /// Showdown tie-break policy.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl RoundConfig {
    /// Create a configuration with the standard deck and an entropy seed.
    pub fn new<I, S>(player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            seed: None,
            composition: DeckComposition::standard(),
            tie_break: TieBreak::default(),
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a non-standard deck.
    #[must_use]
    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Set the showdown tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }
}
