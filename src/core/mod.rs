//! Core types: players, RNG, configuration.
//!
//! Everything else in the crate is built from these. None of them know
//! anything about turns or card effects.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{Hand, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{RoundConfig, TieBreak};
