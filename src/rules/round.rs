//! The round: one deal, played turn by turn until someone wins.
//!
//! A `Round` owns the players, the deck, the discard pile and the turn
//! cursor, and drives the turn state machine:
//!
//! ```text
//! TurnStart -> Drawing -> CountessCheck -> AwaitingPlay
//!     -> EffectResolution -> TurnEnd -> WinCheck -> TurnStart | RoundOver
//! ```
//!
//! Hosts either step it (`start_turn`, then `play`) or let it ask the table
//! for every decision (`play_turn`, `play_out`).
//!
//! ## Example
//!
//! ```
//! use love_letter::core::RoundConfig;
//! use love_letter::rules::Round;
//! use love_letter::table::ScriptedTable;
//!
//! let mut round = Round::new(RoundConfig::new(["Ana", "Bo", "Cy"]).with_seed(42)).unwrap();
//! let mut table = ScriptedTable::new();
//!
//! let result = round.play_out(&mut table).unwrap();
//! assert!(!result.winners().is_empty());
//! ```

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::core::{GameRng, Player, PlayerId, PlayerMap, RoundConfig, TieBreak};
use crate::effects::{EffectOutcome, EffectResolver, ResolverContext};
use crate::table::{RoundEvent, Table};
use crate::zones::{Deck, DiscardPile};

use super::error::RoundError;
use super::result::RoundResult;

/// Turn state machine states.
///
/// Between calls a round rests in `TurnStart`, `AwaitingPlay` or
/// `RoundOver`; the others are passed through inside a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    TurnStart,
    Drawing,
    CountessCheck,
    AwaitingPlay,
    EffectResolution,
    TurnEnd,
    WinCheck,
    RoundOver,
}

/// Whether a hand falls under the forced-play rule.
#[must_use]
pub fn must_play_countess(hand: &[Card]) -> bool {
    hand.iter().any(|c| c.is(CardKind::Countess))
        && hand.iter().any(|c| c.is(CardKind::King) || c.is(CardKind::Prince))
}

/// How many times `Round::play_turn` asks the table for a card before giving up.
pub const MAX_PLAY_ATTEMPTS: usize = 8;

/// What one completed play did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlayerId,
    pub card: Card,
    pub outcomes: Vec<EffectOutcome>,
    /// Set when this play ended the round.
    pub result: Option<RoundResult>,
}

#[derive(Clone, Debug)]
pub struct Round {
    players: PlayerMap<Player>,
    deck: Deck,
    discard: DiscardPile,
    seed: u64,
    tie_break: TieBreak,
    turn_cursor: Option<PlayerId>,
    phase: TurnPhase,
    turn_number: u32,
    result: Option<RoundResult>,
    initial_deck_size: usize,
}

impl Round {
    /// Build, shuffle and deal a round.
    pub fn new(config: RoundConfig) -> Result<Self, RoundError> {
        if config.composition.total() == 0 {
            return Err(RoundError::EmptyDeckComposition);
        }
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deck = Deck::from_cards(config.composition.build_deck());
        deck.shuffle(&mut rng);

        Self::deal(config, deck, rng.seed())
    }

    /// Deal a round from a deck in a known order, top card first.
    ///
    /// The configured composition is ignored. Used for tests and replays.
    pub fn with_deck(
        config: RoundConfig,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self, RoundError> {
        let deck = Deck::from_cards(cards);
        if deck.is_empty() {
            return Err(RoundError::EmptyDeckComposition);
        }
        let seed = config.seed.unwrap_or_default();

        Self::deal(config, deck, seed)
    }

    fn deal(config: RoundConfig, mut deck: Deck, seed: u64) -> Result<Self, RoundError> {
        let count = config.player_count();
        if count < 2 {
            return Err(RoundError::TooFewPlayers { count });
        }
        // Every player gets a card and at least one must remain to draw.
        if count > usize::from(u8::MAX) || count >= deck.len() {
            return Err(RoundError::TooManyPlayers {
                count,
                deck_size: deck.len(),
            });
        }

        let initial_deck_size = deck.len();
        let mut players = PlayerMap::new(count, |id| {
            Player::new(id, config.player_names[id.index()].clone())
        });
        for id in PlayerId::all(count) {
            if let Some(card) = deck.draw() {
                players[id].receive(card);
            }
        }

        info!(
            "dealt {} players from a {}-card deck (seed {})",
            count,
            initial_deck_size,
            seed
        );

        Ok(Self {
            players,
            deck,
            discard: DiscardPile::new(),
            seed,
            tie_break: config.tie_break,
            turn_cursor: None,
            phase: TurnPhase::TurnStart,
            turn_number: 0,
            result: None,
            initial_deck_size,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Panics if `id` is not a seat in this round; see `try_player`.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The player at `id`, or `None` if the round has no such seat.
    #[must_use]
    pub fn try_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.try_get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seats still in the round, in seat order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The deck in draw order. Hidden information; for tests and replays.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The player whose turn it is, once the first turn has started.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turn_cursor
    }

    /// Turns started so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// The seed the deck was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Deck size at creation, before the deal.
    #[must_use]
    pub fn initial_deck_size(&self) -> usize {
        self.initial_deck_size
    }

    /// Cards currently in the deck, the discard pile and every hand.
    /// Always equals `initial_deck_size`.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let held: usize = self.players.iter().map(|(_, p)| p.hand().len()).sum();
        self.deck.len() + self.discard.len() + held
    }

    /// Kinds the current player may legally play. Empty unless a play is awaited.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<CardKind> {
        let Some(player) = self.awaiting_player() else {
            return Vec::new();
        };
        let hand = self.players[player].hand();
        if must_play_countess(hand) {
            return vec![CardKind::Countess];
        }
        let mut kinds: Vec<CardKind> = hand.iter().map(|c| c.kind()).collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }

    fn awaiting_player(&self) -> Option<PlayerId> {
        match (self.phase, self.turn_cursor) {
            (TurnPhase::AwaitingPlay, Some(player)) => Some(player),
            _ => None,
        }
    }

    fn set_phase(&mut self, phase: TurnPhase) {
        trace!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// First active seat strictly after `from`, wrapping. Seat 0 first if `None`.
    fn next_active_after(&self, from: Option<PlayerId>) -> Option<PlayerId> {
        let n = self.players.player_count();
        let start = from.map_or(0, |p| p.index() + 1);
        (0..n)
            .map(|k| PlayerId::new(((start + k) % n) as u8))
            .find(|p| self.players[*p].is_active())
    }

    // === Turn driving ===

    /// Begin the next turn: advance to the next active player, lift their
    /// protection and draw a card for them if the deck has one.
    pub fn start_turn<T: Table + ?Sized>(&mut self, table: &mut T) -> Result<PlayerId, RoundError> {
        if self.result.is_some() {
            return Err(RoundError::RoundOver);
        }
        if let Some(player) = self.awaiting_player() {
            return Err(RoundError::TurnInProgress { player });
        }
        let player = self
            .next_active_after(self.turn_cursor)
            .ok_or(RoundError::RoundOver)?;

        self.turn_cursor = Some(player);
        self.turn_number += 1;
        self.players[player].clear_protection();
        debug!("turn {}: {}", self.turn_number, self.players[player].name());
        table.notify(&RoundEvent::TurnStarted {
            player,
            turn: self.turn_number,
        });

        self.set_phase(TurnPhase::Drawing);
        match self.deck.draw() {
            Some(card) => {
                trace!("{} draws {}", self.players[player].name(), card);
                self.players[player].receive(card);
                table.notify(&RoundEvent::CardDrawn { player, card });
            }
            None => debug!("deck empty, {} plays without drawing", self.players[player].name()),
        }

        self.set_phase(TurnPhase::CountessCheck);
        if must_play_countess(self.players[player].hand()) {
            debug!("{} must play the Countess", self.players[player].name());
        }

        self.set_phase(TurnPhase::AwaitingPlay);
        Ok(player)
    }

    /// Play a card from the current player's hand and resolve it.
    ///
    /// On any error the round is left exactly as it was before the call.
    pub fn play<T: Table + ?Sized>(
        &mut self,
        card: CardKind,
        table: &mut T,
    ) -> Result<TurnReport, RoundError> {
        if self.result.is_some() {
            return Err(RoundError::RoundOver);
        }
        let actor = self.awaiting_player().ok_or(RoundError::TurnNotStarted)?;

        let hand = self.players[actor].hand();
        if !hand.iter().any(|c| c.is(card)) {
            return Err(RoundError::CardNotInHand {
                player: actor,
                card,
            });
        }
        if card != CardKind::Countess && must_play_countess(hand) {
            return Err(RoundError::MustPlayCountess {
                player: actor,
                attempted: card,
            });
        }

        let snapshot = self.clone();
        let mut events = Vec::new();
        match self.resolve_play(actor, card, table, &mut events) {
            Ok(report) => {
                for event in &events {
                    table.notify(event);
                }
                Ok(report)
            }
            Err(err) => {
                debug!("play rolled back: {}", err);
                *self = snapshot;
                Err(err)
            }
        }
    }

    fn resolve_play<T: Table + ?Sized>(
        &mut self,
        actor: PlayerId,
        card: CardKind,
        table: &mut T,
        events: &mut Vec<RoundEvent>,
    ) -> Result<TurnReport, RoundError> {
        let played = self.players[actor].discard(card)?;
        self.discard.push(actor, played);
        debug!("{} plays {}", self.players[actor].name(), played);
        events.push(RoundEvent::CardPlayed {
            player: actor,
            card: played,
        });

        self.set_phase(TurnPhase::EffectResolution);
        let outcomes = {
            let mut ctx =
                ResolverContext::new(&mut self.players, &mut self.deck, &mut self.discard, table);
            EffectResolver::resolve(&mut ctx, actor, card)?
        };
        events.extend(outcomes.iter().cloned().map(RoundEvent::Effect));

        self.set_phase(TurnPhase::TurnEnd);
        self.set_phase(TurnPhase::WinCheck);
        self.check_winner(events);

        Ok(TurnReport {
            player: actor,
            card: played,
            outcomes: outcomes.into_vec(),
            result: self.result.clone(),
        })
    }

    fn check_winner(&mut self, events: &mut Vec<RoundEvent>) {
        let active: Vec<PlayerId> = self.active_players().collect();

        let result = match active.as_slice() {
            [only] => Some(RoundResult::LastStanding(*only)),
            _ if self.deck.is_empty() => {
                events.push(RoundEvent::DeckExhausted);
                Some(self.showdown(&active))
            }
            _ => None,
        };

        match result {
            Some(result) => {
                info!("round over after {} turns: {}", self.turn_number, result);
                self.result = Some(result.clone());
                self.set_phase(TurnPhase::RoundOver);
                events.push(RoundEvent::RoundOver(result));
            }
            None => self.set_phase(TurnPhase::TurnStart),
        }
    }

    /// Highest card in hand wins; ties go through the tie-break policy.
    fn showdown(&self, active: &[PlayerId]) -> RoundResult {
        let rank = |p: &PlayerId| self.players[*p].held_card().map(Card::rank);
        let best = active.iter().map(rank).max().flatten();
        let mut winners: Vec<PlayerId> = active.iter().copied().filter(|p| rank(p) == best).collect();

        if winners.len() > 1 && self.tie_break == TieBreak::DiscardTotal {
            let total = |p: &PlayerId| self.discard.discard_total(*p);
            let best_total = winners.iter().map(total).max().unwrap_or(0);
            winners.retain(|p| total(p) == best_total);
        }

        RoundResult::Showdown { winners }
    }

    /// Start a turn if needed, then ask the table which card to play.
    ///
    /// A choice rejected by the forced-play rule is reported through
    /// `Table::reject_play` and the table is asked again, up to
    /// `MAX_PLAY_ATTEMPTS` times in all. After that the last rejection is
    /// returned and the turn stays open.
    pub fn play_turn<T: Table + ?Sized>(&mut self, table: &mut T) -> Result<TurnReport, RoundError> {
        let actor = match self.awaiting_player() {
            Some(player) => player,
            None => self.start_turn(table)?,
        };

        let mut attempts = 0;
        loop {
            attempts += 1;
            let playable = self.playable_cards();
            let choice = table.choose_card(&self.players[actor], &playable);
            match self.play(choice, table) {
                Err(err) if err.is_rule_violation() && attempts < MAX_PLAY_ATTEMPTS => {
                    table.reject_play(&err);
                }
                Err(err) if err.is_rule_violation() => {
                    debug!(
                        "giving up on {} after {} rejected plays",
                        self.players[actor].name(),
                        attempts
                    );
                    table.reject_play(&err);
                    return Err(err);
                }
                other => return other,
            }
        }
    }

    /// Play turns until the round has a result.
    pub fn play_out<T: Table + ?Sized>(&mut self, table: &mut T) -> Result<RoundResult, RoundError> {
        while self.result.is_none() {
            self.play_turn(table)?;
        }
        self.result.clone().ok_or(RoundError::RoundOver)
    }
}
