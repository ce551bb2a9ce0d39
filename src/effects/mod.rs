//! Card effects.
//!
//! - `TargetSpec`: who a card may be aimed at
//! - `EffectResolver`: applies a played card to round state
//! - `EffectOutcome`: what an effect did, for notifications
//!
//! Effects only touch the pieces of round state handed to them in a
//! `ResolverContext`; turn order and win checks stay in `rules`.

mod outcome;
mod targeting;
mod resolver;

pub use outcome::{EffectOutcome, FizzleReason};
pub use targeting::{TargetSpec, TargetFilter, TargetSelector};
pub use resolver::{EffectResolver, Outcomes, ResolverContext};
