//! Players: seat identifiers, per-seat storage, and per-player round state.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. Seat order is the turn order and never changes
//! during a round.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Hand plus the two round flags: `eliminated` (monotonic) and `protected`
//! (Handmaid, cleared at the start of the player's own turn).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::{Card, CardKind};
use crate::rules::RoundError;

/// Seat identifier supporting up to 255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a round with `player_count` players.
    ///
    /// ```
    /// use love_letter::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use love_letter::core::{PlayerId, PlayerMap};
///
/// let mut tokens: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// tokens[PlayerId::new(1)] += 1;
/// assert_eq!(tokens[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Get a seat's data if the seat exists.
    #[must_use]
    pub fn try_get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Borrow two distinct seats mutably at once.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut requires two distinct seats");
        if a.index() < b.index() {
            let (lo, hi) = self.data.split_at_mut(b.index());
            (&mut lo[a.index()], &mut hi[0])
        } else {
            let (lo, hi) = self.data.split_at_mut(a.index());
            (&mut hi[0], &mut lo[b.index()])
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Cards held by a player.
///
/// One card between turns, two after drawing, three only while a
/// Chancellor is being resolved.
pub type Hand = SmallVec<[Card; 3]>;

/// Per-player round state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    eliminated: bool,
    protected: bool,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: SmallVec::new(),
            eliminated: false,
            protected: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The first card in hand. Between turns this is the player's only card.
    #[must_use]
    pub fn held_card(&self) -> Option<Card> {
        self.hand.first().copied()
    }

    #[must_use]
    pub fn holds(&self, kind: CardKind) -> bool {
        self.hand.iter().any(|c| c.is(kind))
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Not eliminated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Add a card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove one card of the given kind from the hand.
    ///
    /// Fails with `CardNotInHand` and leaves the hand untouched if the
    /// player holds no such card.
    pub fn discard(&mut self, kind: CardKind) -> Result<Card, RoundError> {
        let pos = self
            .hand
            .iter()
            .position(|c| c.is(kind))
            .ok_or(RoundError::CardNotInHand {
                player: self.id,
                card: kind,
            })?;
        Ok(self.hand.remove(pos))
    }

    /// Empty the hand, returning what was in it.
    pub fn take_hand(&mut self) -> Hand {
        std::mem::take(&mut self.hand)
    }

    /// Replace the hand wholesale (King swap, Chancellor keep).
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    /// Knock the player out of the round.
    ///
    /// Returns the cards that were in hand so the caller can move them to
    /// the discard pile. Protection is dropped with them.
    pub fn mark_eliminated(&mut self) -> Hand {
        self.eliminated = true;
        self.protected = false;
        self.take_hand()
    }

    pub fn mark_protected(&mut self) {
        self.protected = true;
    }

    pub fn clear_protection(&mut self) {
        self.protected = false;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(kind: CardKind) -> Card {
        Card::new(kind)
    }

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Seat 1");
        assert_eq!(PlayerId::all(4).count(), 4);
    }

    #[test]
    fn test_player_map_new_and_index() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 10);
        assert_eq!(map[PlayerId::new(2)], 20);

        map[PlayerId::new(0)] = 5;
        assert_eq!(map[PlayerId::new(0)], 5);
        assert_eq!(map.player_count(), 3);
        assert!(map.try_get(PlayerId::new(3)).is_none());
    }

    #[test]
    fn test_player_map_pair_mut() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);
        {
            let (a, b) = map.pair_mut(PlayerId::new(2), PlayerId::new(0));
            std::mem::swap(a, b);
        }
        assert_eq!(map[PlayerId::new(0)], 2);
        assert_eq!(map[PlayerId::new(2)], 0);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_receive_and_discard() {
        let mut p = Player::new(PlayerId::new(0), "Ana");
        p.receive(card(CardKind::Guard));
        p.receive(card(CardKind::King));

        assert_eq!(p.discard(CardKind::King), Ok(card(CardKind::King)));
        assert_eq!(p.hand(), &[card(CardKind::Guard)]);
    }

    #[test]
    fn test_discard_missing_card_leaves_hand() {
        let mut p = Player::new(PlayerId::new(2), "Bo");
        p.receive(card(CardKind::Priest));

        let err = p.discard(CardKind::Baron).unwrap_err();
        assert_eq!(
            err,
            RoundError::CardNotInHand {
                player: PlayerId::new(2),
                card: CardKind::Baron
            }
        );
        assert_eq!(p.hand(), &[card(CardKind::Priest)]);
    }

    #[test]
    fn test_elimination_clears_hand() {
        let mut p = Player::new(PlayerId::new(0), "Ana");
        p.receive(card(CardKind::Princess));
        p.mark_protected();

        let dropped = p.mark_eliminated();
        assert_eq!(dropped.as_slice(), &[card(CardKind::Princess)]);
        assert!(p.is_eliminated());
        assert!(!p.is_protected());
        assert!(p.hand().is_empty());
    }

    #[test]
    fn test_protection_toggle() {
        let mut p = Player::new(PlayerId::new(0), "Ana");
        assert!(!p.is_protected());
        p.mark_protected();
        assert!(p.is_protected());
        p.clear_protection();
        assert!(!p.is_protected());
    }

    #[test]
    fn test_player_serde() {
        let mut p = Player::new(PlayerId::new(1), "Cy");
        p.receive(card(CardKind::Countess));
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
