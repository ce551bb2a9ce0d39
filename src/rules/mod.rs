//! Round rules: the turn state machine, win detection, and errors.
//!
//! `Round` owns all round state and is the only thing a host drives.
//! It calls into `effects` to resolve each played card and reports
//! everything through the `Table` it is given.

pub mod error;
pub mod result;
pub mod round;

pub use error::RoundError;
pub use result::RoundResult;
pub use round::{must_play_countess, Round, TurnPhase, TurnReport, MAX_PLAY_ATTEMPTS};
