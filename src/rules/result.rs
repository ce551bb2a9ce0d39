//! Round results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a round ended and who won it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Everyone else was eliminated.
    LastStanding(PlayerId),
    /// The deck ran out and hands were compared. More than one winner means
    /// the tie-break policy left them tied.
    Showdown { winners: Vec<PlayerId> },
}

impl RoundResult {
    /// Winners in seat order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            RoundResult::LastStanding(p) => std::slice::from_ref(p),
            RoundResult::Showdown { winners } => winners,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().contains(&player)
    }

    /// The single winner, if the win is not shared.
    #[must_use]
    pub fn sole_winner(&self) -> Option<PlayerId> {
        match self.winners() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::LastStanding(p) => write!(f, "{} wins as the last player standing", p),
            RoundResult::Showdown { winners } => {
                let names: Vec<String> = winners.iter().map(ToString::to_string).collect();
                write!(f, "showdown won by {}", names.join(", "))
            }
        }
    }
}
