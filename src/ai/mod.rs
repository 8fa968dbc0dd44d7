//! Placeholder players.
//!
//! - `Agent`: Picks an action for one seat
//! - `RandomAgent`: Uniform over legal actions
//! - `MatchRunner`: Plays a match to the end with one agent per seat

mod agent;
mod runner;

pub use agent::{Agent, RandomAgent};
pub use runner::{MatchError, MatchReport, MatchRunner};
