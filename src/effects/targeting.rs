//! Effect targeting.
//!
//! Defines which players an effect may choose:
//! - `TargetSpec`: the filters a card's target must pass
//! - `TargetFilter`: individual eligibility rules
//! - `TargetSelector`: evaluates a spec against the current players

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::{Player, PlayerId, PlayerMap};

/// Eligibility rules for a target player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFilter {
    /// Target must still be in the round.
    Active,
    /// Target must not be the acting player.
    NotSelf,
    /// Target must not be under Handmaid protection.
    /// The acting player is exempt.
    Unprotected,
}

/// Specification for effect targeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub filters: Vec<TargetFilter>,
}

impl TargetSpec {
    /// Another active, unprotected player (Guard, Priest, Baron, King).
    #[must_use]
    pub fn opponent() -> Self {
        Self {
            filters: vec![TargetFilter::Active, TargetFilter::NotSelf, TargetFilter::Unprotected],
        }
    }

    /// Any active, unprotected player, including the acting player (Prince).
    #[must_use]
    pub fn any_player() -> Self {
        Self {
            filters: vec![TargetFilter::Active, TargetFilter::Unprotected],
        }
    }

    /// The targeting rule for a card kind, or `None` if it takes no target.
    #[must_use]
    pub fn for_card(kind: CardKind) -> Option<Self> {
        match kind {
            CardKind::Guard | CardKind::Priest | CardKind::Baron | CardKind::King => {
                Some(Self::opponent())
            }
            CardKind::Prince => Some(Self::any_player()),
            _ => None,
        }
    }
}

/// Selector for choosing targets based on a spec.
#[derive(Clone, Debug)]
pub struct TargetSelector {
    spec: TargetSpec,
    acting_player: PlayerId,
}

impl TargetSelector {
    pub fn new(spec: TargetSpec, acting_player: PlayerId) -> Self {
        Self { spec, acting_player }
    }

    /// All eligible targets, in seat order.
    pub fn valid_targets(&self, players: &PlayerMap<Player>) -> Vec<PlayerId> {
        players
            .iter()
            .filter(|(_, player)| self.passes_filters(player))
            .map(|(id, _)| id)
            .collect()
    }

    fn passes_filters(&self, player: &Player) -> bool {
        self.spec.filters.iter().all(|filter| self.passes_filter(player, *filter))
    }

    fn passes_filter(&self, player: &Player, filter: TargetFilter) -> bool {
        match filter {
            TargetFilter::Active => player.is_active(),
            TargetFilter::NotSelf => player.id() != self.acting_player,
            TargetFilter::Unprotected => {
                player.id() == self.acting_player || !player.is_protected()
            }
        }
    }

    /// Check a chosen target against the spec.
    pub fn validate_selection(&self, players: &PlayerMap<Player>, selected: PlayerId) -> bool {
        players
            .try_get(selected)
            .is_some_and(|player| self.passes_filters(player))
    }
}
