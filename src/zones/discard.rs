//! Discard pile - append-only history of played and discarded cards.
//!
//! Effects never read it. It exists for observers and for the
//! `TieBreak::DiscardTotal` showdown rule, which is why every entry keeps
//! the seat that discarded it.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// One discarded card and who discarded it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discard {
    pub player: PlayerId,
    pub card: Card,
}

/// Ordered, append-only discard pile. Last entry is the most recent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    entries: Vec<Discard>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card.
    pub fn push(&mut self, player: PlayerId, card: Card) {
        self.entries.push(Discard { player, card });
    }

    /// Append several cards from the same player, in order.
    pub fn extend(&mut self, player: PlayerId, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.push(player, card);
        }
    }

    /// The most recently discarded entry.
    #[must_use]
    pub fn last(&self) -> Option<&Discard> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Discard] {
        &self.entries
    }

    /// Cards discarded by one player, oldest first.
    pub fn discarded_by(&self, player: PlayerId) -> impl Iterator<Item = Card> + '_ {
        self.entries
            .iter()
            .filter(move |d| d.player == player)
            .map(|d| d.card)
    }

    /// Sum of ranks a player has discarded.
    #[must_use]
    pub fn discard_total(&self, player: PlayerId) -> u32 {
        self.discarded_by(player).map(|c| u32::from(c.rank())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_push_and_last() {
        let mut pile = DiscardPile::new();
        assert!(pile.last().is_none());

        pile.push(PlayerId::new(0), Card::new(CardKind::Guard));
        pile.push(PlayerId::new(1), Card::new(CardKind::Handmaid));

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.last().map(|d| d.card), Some(Card::new(CardKind::Handmaid)));
        assert_eq!(pile.last().map(|d| d.player), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_per_player_totals() {
        let mut pile = DiscardPile::new();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        pile.push(p0, Card::new(CardKind::Guard));
        pile.extend(p1, [Card::new(CardKind::King), Card::new(CardKind::Spy)]);
        pile.push(p0, Card::new(CardKind::Baron));

        assert_eq!(pile.discard_total(p0), 1 + 3);
        assert_eq!(pile.discard_total(p1), 7);
        assert_eq!(pile.discarded_by(p1).count(), 2);
        assert_eq!(pile.discard_total(PlayerId::new(2)), 0);
    }
}
