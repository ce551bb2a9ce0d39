//! Effect resolution - one procedure per card kind.
//!
//! The `EffectResolver` runs after the played card has left the hand and
//! reached the discard pile. It may ask the table for a target, a guess, or
//! a Chancellor choice; those requests are the only place a round waits on
//! the outside world.
//!
//! Collaborator answers are validated here. A bad answer is returned as an
//! error and the round rolls back to its pre-play snapshot, so nothing in
//! this module has to undo partial work.

use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::cards::{Card, CardKind};
use crate::core::{Player, PlayerId, PlayerMap};
use crate::rules::RoundError;
use crate::table::Table;
use crate::zones::{Deck, DiscardPile};

use super::outcome::{EffectOutcome, FizzleReason};
use super::targeting::{TargetSelector, TargetSpec};

/// Outcomes of one resolution. Never more than a few.
pub type Outcomes = SmallVec<[EffectOutcome; 2]>;

/// Mutable round state an effect may touch, plus the table to ask.
pub struct ResolverContext<'a, T: Table + ?Sized> {
    pub players: &'a mut PlayerMap<Player>,
    pub deck: &'a mut Deck,
    pub discard: &'a mut DiscardPile,
    pub table: &'a mut T,
}

impl<'a, T: Table + ?Sized> ResolverContext<'a, T> {
    pub fn new(
        players: &'a mut PlayerMap<Player>,
        deck: &'a mut Deck,
        discard: &'a mut DiscardPile,
        table: &'a mut T,
    ) -> Self {
        Self {
            players,
            deck,
            discard,
            table,
        }
    }

    /// Knock `player` out, moving whatever they held to the discard pile.
    fn eliminate(&mut self, player: PlayerId, by: CardKind) -> EffectOutcome {
        let cards = self.players[player].mark_eliminated();
        self.discard.extend(player, cards.iter().copied());
        info!("{} is out of the round ({})", self.players[player].name(), by);
        EffectOutcome::Eliminated {
            player,
            by,
            cards: cards.into_vec(),
        }
    }

    /// Ask the table for a target of `card`.
    ///
    /// `Ok(None)` means the effect fizzles: nobody was eligible or the
    /// table declined. An answer outside the offered candidates is an error.
    fn choose_target(
        &mut self,
        actor: PlayerId,
        card: CardKind,
        out: &mut Outcomes,
    ) -> Result<Option<PlayerId>, RoundError> {
        let Some(spec) = TargetSpec::for_card(card) else {
            return Ok(None);
        };
        let selector = TargetSelector::new(spec, actor);
        let candidates = selector.valid_targets(self.players);

        if candidates.is_empty() {
            debug!("{} has no eligible target", card);
            out.push(EffectOutcome::Fizzled {
                player: actor,
                card,
                reason: FizzleReason::NoEligibleTarget,
            });
            return Ok(None);
        }

        match self.table.request_target(actor, card, &candidates) {
            Some(target) if selector.validate_selection(self.players, target) => Ok(Some(target)),
            Some(target) => Err(RoundError::InvalidTarget { card, target }),
            None => {
                debug!("{} declined", card);
                out.push(EffectOutcome::Fizzled {
                    player: actor,
                    card,
                    reason: FizzleReason::Declined,
                });
                Ok(None)
            }
        }
    }
}

/// Resolves card effects on round state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve the effect of `card`, just played by `actor`.
    pub fn resolve<T: Table + ?Sized>(
        ctx: &mut ResolverContext<'_, T>,
        actor: PlayerId,
        card: CardKind,
    ) -> Result<Outcomes, RoundError> {
        let mut out = Outcomes::new();

        match card {
            // No rule has been given to the Spy; it is a plain discard.
            CardKind::Spy | CardKind::Countess => {
                out.push(EffectOutcome::NoEffect { player: actor, card });
            }
            CardKind::Guard => Self::guard(ctx, actor, &mut out)?,
            CardKind::Priest => Self::priest(ctx, actor, &mut out)?,
            CardKind::Baron => Self::baron(ctx, actor, &mut out)?,
            CardKind::Handmaid => {
                ctx.players[actor].mark_protected();
                out.push(EffectOutcome::Protected { player: actor });
            }
            CardKind::Prince => Self::prince(ctx, actor, &mut out)?,
            CardKind::Chancellor => Self::chancellor(ctx, actor, &mut out)?,
            CardKind::King => Self::king(ctx, actor, &mut out)?,
            CardKind::Princess => {
                out.push(ctx.eliminate(actor, CardKind::Princess));
            }
        }

        Ok(out)
    }

    fn guard<T: Table + ?Sized>(
        ctx: &mut ResolverContext<'_, T>,
        actor: PlayerId,
        out: &mut Outcomes,
    ) -> Result<(), RoundError> {
        let Some(target) = ctx.choose_target(actor, CardKind::Guard, out)? else {
            return Ok(());
        };
        let Some(guess) = ctx.table.request_guess(actor, target, CardKind::Guard) else {
            out.push(EffectOutcome::Fizzled {
                player: actor,
                card: CardKind::Guard,
                reason: FizzleReason::Declined,
            });
            return Ok(());
        };

        debug!("Guard names {} against {}", guess, ctx.players[target].name());
        if guess == CardKind::Guard {
            out.push(EffectOutcome::GuardImmune { player: actor, target });
        } else if ctx.players[target].holds(guess) {
            out.push(ctx.eliminate(target, CardKind::Guard));
        } else {
            out.push(EffectOutcome::GuessMissed {
                player: actor,
                target,
                guess,
            });
        }
        Ok(())
    }

    fn priest<T: Table + ?Sized>(
        ctx: &mut ResolverContext<'_, T>,
        actor: PlayerId,
        out: &mut Outcomes,
    ) -> Result<(), RoundError> {
        let Some(target) = ctx.choose_target(actor, CardKind::Priest, out)? else {
            return Ok(());
        };
        let cards = ctx.players[target].hand().to_vec();
        trace!("Priest reveals {:?}", cards);
        out.push(EffectOutcome::Revealed {
            viewer: actor,
            target,
            cards,
        });
        Ok(())
    }

    fn baron<T: Table + ?Sized>(
        ctx: &mut ResolverContext<'_, T>,
        actor: PlayerId,
        out: &mut Outcomes,
    ) -> Result<(), RoundError> {
        let Some(target) = ctx.choose_target(actor, CardKind::Baron, out)? else {
            return Ok(());
        };
        let player_card = ctx.players[actor].held_card();
        let target_card = ctx.players[target].held_card();

        // An empty hand ranks below every card.
        let loser = match player_card.map(Card::rank).cmp(&target_card.map(Card::rank)) {
            std::cmp::Ordering::Less => Some(actor),
            std::cmp::Ordering::Greater => Some(target),
            std::cmp::Ordering::Equal => None,
        };

        out.push(EffectOutcome::Compared {
            player: actor,
            target,
            player_card,
            target_card,
            loser,
        });
        if let Some(loser) = loser {
            out.push(ctx.eliminate(loser, CardKind::Baron));
        }
        Ok(())
    }

    fn prince<T: Table + ?Sized>(
        ctx: &mut ResolverContext<'_, T>,
        actor: PlayerId,
        out: &mut Outcomes,
    ) -> Result<(), RoundError> {
        let Some(target) = ctx.choose_target(actor, CardKind::Prince, out)? else {
            return Ok(());
        };
        let cards = ctx.players[target].take_hand();
        ctx.discard.extend(target, cards.iter().copied());

        if cards.iter().any(|c| c.is(CardKind::Princess)) {
            out.push(EffectOutcome::Discarded {
                player: actor,
                target,
                cards: cards.into_vec(),
                replacement: None,
            });
            out.push(ctx.eliminate(target, CardKind::Prince));
            return Ok(());
        }

        let replacement = ctx.deck.draw();
        match replacement {
            Some(card) => ctx.players[target].receive(card),
            None => debug!("deck empty, {} draws nothing", ctx.players[target].name()),
        }
        out.push(EffectOutcome::Discarded {
            player: actor,
            target,
            cards: cards.into_vec(),
            replacement,
        });
        Ok(())
    }

    fn chancellor<T: Table + ?Sized>(
        ctx: &mut ResolverContext<'_, T>,
        actor: PlayerId,
        out: &mut Outcomes,
    ) -> Result<(), RoundError> {
        let mut drawn = 0;
        for _ in 0..2 {
            match ctx.deck.draw() {
                Some(card) => {
                    ctx.players[actor].receive(card);
                    drawn += 1;
                }
                None => break,
            }
        }

        if drawn == 0 {
            debug!("deck empty, Chancellor draws nothing");
            out.push(EffectOutcome::Exchanged {
                player: actor,
                drawn: 0,
                returned: 0,
            });
            return Ok(());
        }

        let offered = ctx.players[actor].hand().to_vec();
        let choice = ctx.table.request_chancellor_choice(actor, &offered);
        if !choice.partitions(&offered) {
            return Err(RoundError::InvalidChancellorChoice { player: actor });
        }

        ctx.players[actor].set_hand(SmallVec::from_slice(&[choice.keep]));
        for card in &choice.return_order {
            ctx.deck.return_to_bottom(*card);
        }
        out.push(EffectOutcome::Exchanged {
            player: actor,
            drawn,
            returned: choice.return_order.len(),
        });
        Ok(())
    }

    fn king<T: Table + ?Sized>(
        ctx: &mut ResolverContext<'_, T>,
        actor: PlayerId,
        out: &mut Outcomes,
    ) -> Result<(), RoundError> {
        let Some(target) = ctx.choose_target(actor, CardKind::King, out)? else {
            return Ok(());
        };
        let (a, b) = ctx.players.pair_mut(actor, target);
        let held = a.take_hand();
        a.set_hand(b.take_hand());
        b.set_hand(held);

        out.push(EffectOutcome::Swapped { player: actor, target });
        Ok(())
    }
}
