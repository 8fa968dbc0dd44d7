//! # love-letter
//!
//! Rules engine for the Love Letter card game, plus an in-memory lobby
//! relay and random placeholder agents.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Every engine call takes a `GameState` snapshot
//!    and returns a new one. Inputs are never modified.
//!
//! 2. **Explicit rejection**: An illegal action returns a `Rejection`
//!    (reason plus the unchanged state with one log line). A legal play
//!    whose effect fizzles is an ordinary `Ok` state.
//!
//! 3. **Seedable shuffles**: The RNG lives inside the state, so a match is
//!    reproducible from its seed and every transition is deterministic.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot clones via `im-rs`.
//!
//! - **Server-side hiding**: Clients receive a `PlayerView`, never the
//!   full `GameState`.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors, views
//! - `cards`: Ranks, cards, hands and the deck manager
//! - `effects`: Targeting rules and per-rank effect resolution
//! - `rules`: Turn controller, scoring and the `RulesEngine`
//! - `ai`: Placeholder agents and a match runner
//! - `relay`: Lobby management for a multiplayer front-end
//!
//! ## Example
//!
//! ```
//! use love_letter::{GameRng, RoundEngine};
//!
//! let engine = RoundEngine::default();
//! let state = engine
//!     .initialize_game(&["p1", "p2"], &["Ada", "Bo"], GameRng::new(7))
//!     .unwrap();
//! assert_eq!(state.deck.len(), 13);
//!
//! let state = engine.draw_card(&state, &"p1".into()).unwrap();
//! assert_eq!(state.players[0].hand.len(), 2);
//! ```

pub mod core;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod ai;
pub mod relay;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Player,
    GameRng, GameRngState,
    MatchConfig, ConfigError,
    Action, ActionRecord, CardPlay,
    GameState, TurnPhase, Reveal,
    Outcome, Rejection, RuleError,
    PlayerView,
};

pub use crate::cards::{Card, CardId, Hand, Rank, DECK_SIZE};

pub use crate::rules::{GameResult, RoundEngine, RoundResult, RulesEngine};

pub use crate::effects::{EffectOutcome, FizzleReason};

pub use crate::ai::{Agent, RandomAgent, MatchRunner};

pub use crate::relay::{LobbyManager, LobbyCode, RelayError, RelayEvent};

/// Start a match with the default rules. See `RoundEngine::initialize_game`.
pub fn initialize_game<I, N>(ids: &[I], names: &[N], rng: GameRng) -> Result<GameState, RuleError>
where
    I: AsRef<str>,
    N: AsRef<str>,
{
    RoundEngine::default().initialize_game(ids, names, rng)
}

/// Start a match dealing from a caller-ordered deck (top = end).
pub fn initialize_game_with_deck<I, N>(
    ids: &[I],
    names: &[N],
    deck: Vec<Card>,
    rng: GameRng,
) -> Result<GameState, RuleError>
where
    I: AsRef<str>,
    N: AsRef<str>,
{
    RoundEngine::default().initialize_game_with_deck(ids, names, deck, rng)
}

/// Draw for `player` under the default rules.
pub fn draw_card(state: &GameState, player: &PlayerId) -> Outcome {
    RoundEngine::default().draw_card(state, player)
}

/// Play a card for `player` under the default rules.
pub fn play_card(state: &GameState, player: &PlayerId, play: &CardPlay) -> Outcome {
    RoundEngine::default().play_card(state, player, play)
}

/// Deal the next round under the default rules.
pub fn start_new_round(state: &GameState) -> Outcome {
    RoundEngine::default().start_new_round(state)
}
