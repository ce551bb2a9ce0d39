//! Deck composition - how many copies of each kind a round is built from.
//!
//! The standard composition follows `CardKind::count_in_deck`. Variants
//! (such as the five-Guard deck) override individual counts.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::catalog::CardKind;

/// Copies per card kind, indexed by rank.
///
/// ## Example
///
/// ```
/// use love_letter::cards::{CardKind, DeckComposition};
///
/// let standard = DeckComposition::standard();
/// assert_eq!(standard.total(), 21);
///
/// let five_guards = DeckComposition::standard().with_count(CardKind::Guard, 5);
/// assert_eq!(five_guards.total(), 20);
/// assert_eq!(five_guards.build_deck().len(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    counts: [usize; 10],
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeckComposition {
    /// The catalog's own counts.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            counts: CardKind::ALL.map(CardKind::count_in_deck),
        }
    }

    /// A composition with no cards at all. Build up with `with_count`.
    #[must_use]
    pub fn empty() -> Self {
        Self { counts: [0; 10] }
    }

    /// Override the number of copies of one kind (builder pattern).
    #[must_use]
    pub fn with_count(mut self, kind: CardKind, count: usize) -> Self {
        self.counts[kind.rank() as usize] = count;
        self
    }

    /// Copies of `kind` in this composition.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> usize {
        self.counts[kind.rank() as usize]
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterate over `(kind, count)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (CardKind, usize)> + '_ {
        CardKind::ALL.into_iter().map(|kind| (kind, self.count(kind)))
    }

    /// Expand into an unshuffled, rank-ordered sequence of cards.
    #[must_use]
    pub fn build_deck(&self) -> Vec<Card> {
        self.iter()
            .flat_map(|(kind, count)| std::iter::repeat(Card::new(kind)).take(count))
            .collect()
    }
}
