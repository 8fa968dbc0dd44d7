//! Drive a whole match with one agent per seat.

use thiserror::Error;

use crate::core::{GameState, PlayerId, Rejection};
use crate::rules::{GameResult, RulesEngine};

use super::Agent;

/// Why an automated match stopped before it finished.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("need one agent per seat: {seats} seats, {agents} agents")]
    AgentCount { seats: usize, agents: usize },

    #[error("{0} has no action to take")]
    Stalled(PlayerId),

    #[error("agent chose an illegal action")]
    Rejected(#[from] Rejection),

    #[error("match did not finish within {0} actions")]
    ActionLimit(usize),
}

/// A finished match.
#[derive(Clone, Debug)]
pub struct MatchReport {
    pub result: GameResult,
    /// Accepted actions, including round deals.
    pub actions: usize,
    pub state: GameState,
}

/// Plays matches to completion.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    /// Maximum accepted actions per match.
    pub max_actions: usize,
}

impl Default for MatchRunner {
    fn default() -> Self {
        Self { max_actions: 10_000 }
    }
}

impl MatchRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action limit (builder pattern).
    #[must_use]
    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }

    /// Play from `state` until the match ends. `agents[i]` plays seat `i`.
    ///
    /// The current seat also deals the next round when one ends.
    pub fn play_match(
        &self,
        engine: &dyn RulesEngine,
        mut state: GameState,
        agents: &mut [Box<dyn Agent>],
    ) -> Result<MatchReport, MatchError> {
        if agents.len() != state.player_count() {
            return Err(MatchError::AgentCount {
                seats: state.player_count(),
                agents: agents.len(),
            });
        }

        for actions in 0..self.max_actions {
            if let Some(result) = engine.is_terminal(&state) {
                tracing::debug!(winner = %result.winner, actions, "match finished");
                return Ok(MatchReport {
                    result,
                    actions,
                    state,
                });
            }

            let seat = state.current_player_index;
            let player = state.current_player().id.clone();
            let action = agents[seat]
                .choose_action(engine, &state, &player)
                .ok_or_else(|| MatchError::Stalled(player.clone()))?;

            state = engine.apply_action(&state, &player, &action)?;
        }

        Err(MatchError::ActionLimit(self.max_actions))
    }
}
