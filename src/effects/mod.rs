//! Card effect system.
//!
//! - `targeting`: Which choices are legal, and which targets accept an effect
//! - `EffectResolver`: Applies a discarded card's rank effect to the state
//! - `EffectOutcome`: What happened, including why an effect fizzled
//!
//! A refused choice (self-target, Guard naming Guard) is a `RuleError`.
//! A legal play whose target is missing, out or protected fizzles: the card
//! is spent and the turn still passes.

mod effect;
mod resolver;
pub mod targeting;

pub use effect::{EffectOutcome, FizzleReason};
pub use resolver::{countess_forced, EffectResolver};
pub use targeting::{locate_target, valid_targets, validate_choice};
