//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules that move a `GameState` from
//! one snapshot to the next live in `rules` and `effects`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{Action, ActionRecord, CardPlay};
pub use config::{ConfigError, MatchConfig, TokenThresholds};
pub use error::{Outcome, Rejection, RuleError};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Reveal, TurnPhase};
pub use view::{PlayerView, SeatView, VisibleCard};
