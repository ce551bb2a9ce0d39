//! Round notifications.
//!
//! Fire-and-forget events the round sends to its table after each step.
//! Some carry hidden information (drawn cards, Priest reveals); the table
//! decides who gets to see them.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::effects::EffectOutcome;
use crate::rules::RoundResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A player's turn began. `turn` counts from 1.
    TurnStarted { player: PlayerId, turn: u32 },
    /// The turn's player drew a card. Private to `player`.
    CardDrawn { player: PlayerId, card: Card },
    /// A card was played face up.
    CardPlayed { player: PlayerId, card: Card },
    /// Something the played card did.
    Effect(EffectOutcome),
    /// The deck ran out; the round goes to a showdown.
    DeckExhausted,
    /// The round has a result.
    RoundOver(RoundResult),
}

impl RoundEvent {
    /// Whether only `player` should see this event's details.
    #[must_use]
    pub fn private_to(&self) -> Option<PlayerId> {
        match self {
            RoundEvent::CardDrawn { player, .. } => Some(*player),
            RoundEvent::Effect(EffectOutcome::Revealed { viewer, .. }) => Some(*viewer),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundEvent::TurnStarted { player, turn } => write!(f, "turn {}: {}", turn, player),
            RoundEvent::CardDrawn { player, .. } => write!(f, "{} drew a card", player),
            RoundEvent::CardPlayed { player, card } => write!(f, "{} played {}", player, card),
            RoundEvent::Effect(outcome) => write!(f, "{}", outcome),
            RoundEvent::DeckExhausted => write!(f, "the deck is empty"),
            RoundEvent::RoundOver(result) => write!(f, "{}", result),
        }
    }
}
