//! The draw deck.
//!
//! An ordered sequence of cards, top first. Backed by `im::Vector` so the
//! round can snapshot itself in O(1) before resolving an effect and roll
//! back if the collaborator violates the contract mid-resolution.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// Draw deck. Index 0 is the top card.
///
/// ```
/// use love_letter::cards::{Card, CardKind};
/// use love_letter::zones::Deck;
///
/// let mut deck = Deck::from_cards([Card::new(CardKind::Guard), Card::new(CardKind::King)]);
/// assert_eq!(deck.draw(), Some(Card::new(CardKind::Guard)));
///
/// deck.return_to_bottom(Card::new(CardKind::Priest));
/// assert_eq!(deck.draw(), Some(Card::new(CardKind::King)));
/// assert_eq!(deck.draw(), Some(Card::new(CardKind::Priest)));
/// assert_eq!(deck.draw(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck in the given order, first card on top.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Apply a uniformly random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove and return the top card. An empty deck yields `None`.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Put a card on the bottom.
    pub fn return_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Put a card on top, so it is the next one drawn.
    pub fn return_to_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order. Hidden information; for tests and replays.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}
