//! A table that answers from pre-loaded queues.
//!
//! Used for tests and replays. Each request pops the next scripted answer;
//! when a queue runs dry the table falls back to a fixed choice (first
//! playable card, first candidate, keep the first offered card). Every
//! notification and request is recorded for inspection.

use std::collections::VecDeque;

use crate::cards::{Card, CardKind};
use crate::core::{Player, PlayerId};
use crate::rules::RoundError;

use super::{ChancellorChoice, RoundEvent, Table};

#[derive(Clone, Debug, Default)]
pub struct ScriptedTable {
    plays: VecDeque<CardKind>,
    targets: VecDeque<Option<PlayerId>>,
    guesses: VecDeque<Option<CardKind>>,
    chancellor: VecDeque<ChancellorChoice>,

    /// Every notification, in order.
    pub events: Vec<RoundEvent>,
    /// Candidate lists offered by `request_target`, with the card asking.
    pub target_requests: Vec<(CardKind, Vec<PlayerId>)>,
    /// Card sets offered by `request_chancellor_choice`.
    pub chancellor_requests: Vec<Vec<Card>>,
    /// Plays rejected by the forced-play rule.
    pub rejections: Vec<RoundError>,
}

impl ScriptedTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a card choice.
    #[must_use]
    pub fn play(mut self, kind: CardKind) -> Self {
        self.plays.push_back(kind);
        self
    }

    /// Queue a target answer.
    #[must_use]
    pub fn target(mut self, target: PlayerId) -> Self {
        self.targets.push_back(Some(target));
        self
    }

    /// Queue a declined target request.
    #[must_use]
    pub fn decline_target(mut self) -> Self {
        self.targets.push_back(None);
        self
    }

    /// Queue a Guard guess.
    #[must_use]
    pub fn guess(mut self, kind: CardKind) -> Self {
        self.guesses.push_back(Some(kind));
        self
    }

    /// Queue a Chancellor answer.
    #[must_use]
    pub fn chancellor(mut self, choice: ChancellorChoice) -> Self {
        self.chancellor.push_back(choice);
        self
    }

    /// Outcomes reported so far.
    pub fn outcomes(&self) -> impl Iterator<Item = &crate::effects::EffectOutcome> + '_ {
        self.events.iter().filter_map(|event| match event {
            RoundEvent::Effect(outcome) => Some(outcome),
            _ => None,
        })
    }
}

impl Table for ScriptedTable {
    fn choose_card(&mut self, _player: &Player, playable: &[CardKind]) -> CardKind {
        self.plays.pop_front().unwrap_or_else(|| playable[0])
    }

    fn request_target(
        &mut self,
        _actor: PlayerId,
        card: CardKind,
        candidates: &[PlayerId],
    ) -> Option<PlayerId> {
        self.target_requests.push((card, candidates.to_vec()));
        self.targets
            .pop_front()
            .unwrap_or_else(|| candidates.first().copied())
    }

    fn request_guess(
        &mut self,
        _actor: PlayerId,
        _target: PlayerId,
        exclude: CardKind,
    ) -> Option<CardKind> {
        self.guesses
            .pop_front()
            .unwrap_or_else(|| CardKind::ALL.into_iter().find(|k| *k != exclude))
    }

    fn request_chancellor_choice(&mut self, _actor: PlayerId, cards: &[Card]) -> ChancellorChoice {
        self.chancellor_requests.push(cards.to_vec());
        self.chancellor.pop_front().unwrap_or_else(|| ChancellorChoice {
            keep: cards[0],
            return_order: cards[1..].to_vec(),
        })
    }

    fn notify(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }

    fn reject_play(&mut self, error: &RoundError) {
        self.rejections.push(error.clone());
    }
}
