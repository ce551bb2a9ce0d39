//! # love-letter
//!
//! A round engine for Love Letter style card games.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine never talks to players directly. Every
//!    decision is asked of a `Table` and every change is reported back to it.
//!
//! 2. **N-Player First**: Seat counts come from configuration. Nothing
//!    assumes two players.
//!
//! 3. **All or Nothing**: A failing call leaves the round exactly as it was.
//!
//! ## Architecture
//!
//! - **Persistent Deck**: The draw pile is an `im::Vector`, so a round can be
//!   snapshotted cheaply before every play and restored on error.
//!
//! - **Deterministic Shuffles**: ChaCha8 seeded per round. The same seed and
//!   the same answers replay the same round.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration
//! - `cards`: Card catalog and deck composition
//! - `zones`: Deck and discard pile
//! - `effects`: Targeting and per-card effect resolution
//! - `rules`: The `Round` state machine, results and errors
//! - `table`: The host interface and round events

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, PlayerMap,
    GameRng,
    RoundConfig, TieBreak,
};

pub use crate::cards::{Card, CardKind, DeckComposition};

pub use crate::zones::{Deck, DiscardPile};

pub use crate::effects::{EffectOutcome, FizzleReason, EffectResolver, ResolverContext};

pub use crate::rules::{Round, RoundError, RoundResult, TurnPhase, TurnReport};

pub use crate::table::{ChancellorChoice, RoundEvent, ScriptedTable, Table};
