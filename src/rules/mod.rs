//! Round rules: turn flow, scoring and the public engine.
//!
//! - `turn`: The draw → play → effect → next-turn state machine
//! - `scoring`: Showdown tie-breaks and the match token threshold
//! - `RoundEngine`: Match setup, round restarts and the `RulesEngine` impl
//!
//! Agents and the relay only talk to `RulesEngine`; they never reach into
//! the turn controller directly.

pub mod engine;
pub mod scoring;
pub mod turn;

pub use engine::{GameResult, RoundEngine, RulesEngine};
pub use scoring::{determine_round_winner, match_winner, score_round, RoundResult};
