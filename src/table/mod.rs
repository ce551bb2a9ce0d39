//! The table: everything outside the round engine.
//!
//! A `Table` is whatever sits between the engine and the people playing:
//! a UI, a network session, a test script. The round talks to it through
//! one synchronous interface:
//!
//! - **Requests** (`choose_card`, `request_target`, `request_guess`,
//!   `request_chancellor_choice`) block the round until answered. Exactly one
//!   request is outstanding at a time.
//! - **Notifications** (`notify`) report what happened, in order. A play's
//!   notifications are only sent after its requests have been answered.
//!
//! Returning `None` from a target or guess request declines the effect,
//! which then resolves as a no-op.

mod event;
mod scripted;

pub use event::RoundEvent;
pub use scripted::ScriptedTable;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::core::{Player, PlayerId};
use crate::rules::RoundError;

/// Answer to a Chancellor request.
///
/// `keep` stays in hand. `return_order` goes to the bottom of the deck in
/// that order, so `return_order[0]` is drawn before `return_order[1]`.
/// Together they must be exactly the cards offered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChancellorChoice {
    pub keep: Card,
    pub return_order: Vec<Card>,
}

impl ChancellorChoice {
    pub fn new(keep: impl Into<Card>, return_order: impl IntoIterator<Item = CardKind>) -> Self {
        Self {
            keep: keep.into(),
            return_order: return_order.into_iter().map(Card::new).collect(),
        }
    }

    /// Whether this answer uses every offered card exactly once.
    #[must_use]
    pub fn partitions(&self, offered: &[Card]) -> bool {
        let mut chosen: Vec<Card> = Vec::with_capacity(self.return_order.len() + 1);
        chosen.push(self.keep);
        chosen.extend_from_slice(&self.return_order);
        chosen.sort();

        let mut offered = offered.to_vec();
        offered.sort();
        chosen == offered
    }
}

/// The round's collaborator.
pub trait Table {
    /// Pick a card for `player` to play. `playable` is never empty and
    /// contains only the Countess when the forced-play rule applies.
    ///
    /// `Round::play_turn` asks again after a forced-play rejection, at most
    /// `MAX_PLAY_ATTEMPTS` times before returning the error.
    fn choose_card(&mut self, player: &Player, playable: &[CardKind]) -> CardKind;

    /// Pick one of `candidates` as the target of `card`. Never called with
    /// an empty candidate list.
    fn request_target(
        &mut self,
        actor: PlayerId,
        card: CardKind,
        candidates: &[PlayerId],
    ) -> Option<PlayerId>;

    /// Name a card kind for a Guard aimed at `target`. Naming `exclude`
    /// (Guard) is allowed but can never knock anyone out.
    fn request_guess(
        &mut self,
        actor: PlayerId,
        target: PlayerId,
        exclude: CardKind,
    ) -> Option<CardKind>;

    /// Keep one of `cards` and order the rest for the bottom of the deck.
    fn request_chancellor_choice(&mut self, actor: PlayerId, cards: &[Card]) -> ChancellorChoice;

    /// Something happened.
    ///
    /// Events from a play (`CardPlayed`, its `Effect`s, `DeckExhausted`,
    /// `RoundOver`) are sent together once the play has fully resolved, so
    /// any target, guess or Chancellor request for that play arrives
    /// *before* its `CardPlayed`. A play that fails sends none of them.
    /// Hosts that need to show the played card while asking for a target
    /// should use the card passed to the request.
    fn notify(&mut self, _event: &RoundEvent) {}

    /// A chosen card broke the forced-play rule; `choose_card` will be asked again.
    fn reject_play(&mut self, _error: &RoundError) {}
}
