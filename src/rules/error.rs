//! Errors returned by round operations.
//!
//! Only two kinds of failure reach the caller:
//! - contract violations by the host (a card that is not in hand, a target
//!   outside the offered candidates, a malformed Chancellor answer, calling
//!   operations out of turn order)
//! - the forced-play rule (`MustPlayCountess`), which the host should
//!   surface to the player and re-prompt
//!
//! An empty deck or an effect with no eligible target is normal play and is
//! never reported as an error. Every failing operation leaves the round
//! exactly as it was.

use crate::cards::CardKind;
use crate::core::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundError {
    /// Fewer than two player names were supplied.
    TooFewPlayers { count: usize },
    /// The deck cannot deal one card to every player and keep one to draw.
    TooManyPlayers { count: usize, deck_size: usize },
    /// The configured composition has no cards.
    EmptyDeckComposition,
    /// The player does not hold a card of this kind.
    CardNotInHand { player: PlayerId, card: CardKind },
    /// The player holds the Countess with a King or Prince and tried to play something else.
    MustPlayCountess { player: PlayerId, attempted: CardKind },
    /// The round already has a result.
    RoundOver,
    /// `play` was called before `start_turn`.
    TurnNotStarted,
    /// `start_turn` was called while a play is still awaited.
    TurnInProgress { player: PlayerId },
    /// The collaborator answered a target request with a player it was not offered.
    InvalidTarget { card: CardKind, target: PlayerId },
    /// The collaborator's Chancellor answer does not partition the offered cards.
    InvalidChancellorChoice { player: PlayerId },
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPlayers { count } => {
                write!(f, "a round needs at least 2 players, got {}", count)
            }
            Self::TooManyPlayers { count, deck_size } => write!(
                f,
                "{} players cannot share a deck of {} cards",
                count, deck_size
            ),
            Self::EmptyDeckComposition => write!(f, "deck composition has no cards"),
            Self::CardNotInHand { player, card } => {
                write!(f, "{} does not hold a {}", player, card)
            }
            Self::MustPlayCountess { player, attempted } => write!(
                f,
                "{} must play the Countess, not the {}",
                player, attempted
            ),
            Self::RoundOver => write!(f, "the round is over"),
            Self::TurnNotStarted => write!(f, "no turn has been started"),
            Self::TurnInProgress { player } => {
                write!(f, "{} has not played yet", player)
            }
            Self::InvalidTarget { card, target } => {
                write!(f, "{} is not a valid target for the {}", target, card)
            }
            Self::InvalidChancellorChoice { player } => {
                write!(f, "invalid Chancellor choice from {}", player)
            }
        }
    }
}

impl std::error::Error for RoundError {}

impl RoundError {
    /// Rule violations the player can fix by choosing differently.
    /// Everything else is a bug in the host integration.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::MustPlayCountess { .. })
    }
}
