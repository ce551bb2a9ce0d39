//! What a resolved card effect did.
//!
//! One play can produce several outcomes: a Baron comparison followed by the
//! loser's elimination, or a Prince discard followed by a Princess
//! elimination. They are reported to the table in the order they happened.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::core::PlayerId;

/// Why an effect that wanted a target did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FizzleReason {
    /// Every other player is eliminated or protected.
    NoEligibleTarget,
    /// The table declined to pick a target or a guess.
    Declined,
}

/// A single observable consequence of a played card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    /// The card has no effect of its own (Spy, Countess).
    NoEffect { player: PlayerId, card: CardKind },

    /// A targeted effect resolved as a no-op.
    Fizzled {
        player: PlayerId,
        card: CardKind,
        reason: FizzleReason,
    },

    /// Guard named a kind the target does not hold.
    GuessMissed {
        player: PlayerId,
        target: PlayerId,
        guess: CardKind,
    },

    /// Guard named Guard. Never eliminates, whatever the target holds.
    GuardImmune { player: PlayerId, target: PlayerId },

    /// Priest: the target's hand, shown to `viewer` only.
    Revealed {
        viewer: PlayerId,
        target: PlayerId,
        cards: Vec<Card>,
    },

    /// Baron comparison. `loser` is `None` on a tie.
    Compared {
        player: PlayerId,
        target: PlayerId,
        player_card: Option<Card>,
        target_card: Option<Card>,
        loser: Option<PlayerId>,
    },

    /// Handmaid protection granted.
    Protected { player: PlayerId },

    /// Prince: `target` discarded their hand and maybe drew a replacement.
    Discarded {
        player: PlayerId,
        target: PlayerId,
        cards: Vec<Card>,
        replacement: Option<Card>,
    },

    /// Chancellor: `drawn` cards taken from the deck, `returned` put on the bottom.
    Exchanged {
        player: PlayerId,
        drawn: usize,
        returned: usize,
    },

    /// King: hands traded.
    Swapped { player: PlayerId, target: PlayerId },

    /// A player is out of the round. `cards` went to the discard pile.
    Eliminated {
        player: PlayerId,
        by: CardKind,
        cards: Vec<Card>,
    },
}

impl EffectOutcome {
    /// The eliminated player, if this outcome is an elimination.
    #[must_use]
    pub fn eliminated(&self) -> Option<PlayerId> {
        match self {
            EffectOutcome::Eliminated { player, .. } => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for EffectOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectOutcome::NoEffect { player, card } => {
                write!(f, "{} played the {} with no effect", player, card)
            }
            EffectOutcome::Fizzled { player, card, reason } => match reason {
                FizzleReason::NoEligibleTarget => {
                    write!(f, "{}'s {} has no eligible target", player, card)
                }
                FizzleReason::Declined => write!(f, "{}'s {} was declined", player, card),
            },
            EffectOutcome::GuessMissed { target, guess, .. } => {
                write!(f, "{} does not hold a {}", target, guess)
            }
            EffectOutcome::GuardImmune { target, .. } => {
                write!(f, "a Guard cannot knock out {} by naming Guard", target)
            }
            EffectOutcome::Revealed { viewer, target, .. } => {
                write!(f, "{} looked at {}'s hand", viewer, target)
            }
            EffectOutcome::Compared { player, target, loser, .. } => match loser {
                Some(loser) => write!(f, "{} and {} compared hands; {} lost", player, target, loser),
                None => write!(f, "{} and {} compared hands; tie", player, target),
            },
            EffectOutcome::Protected { player } => {
                write!(f, "{} is protected until their next turn", player)
            }
            EffectOutcome::Discarded { target, cards, replacement, .. } => {
                write!(f, "{} discarded {} card(s)", target, cards.len())?;
                if replacement.is_some() {
                    write!(f, " and drew a replacement")?;
                }
                Ok(())
            }
            EffectOutcome::Exchanged { player, drawn, returned } => write!(
                f,
                "{} drew {} and returned {} to the bottom of the deck",
                player, drawn, returned
            ),
            EffectOutcome::Swapped { player, target } => {
                write!(f, "{} and {} traded hands", player, target)
            }
            EffectOutcome::Eliminated { player, by, .. } => {
                write!(f, "{} is out of the round ({})", player, by)
            }
        }
    }
}
