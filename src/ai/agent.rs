//! Agents that pick actions for a seat.

use crate::core::{Action, GameRng, GameState, PlayerId};
use crate::rules::RulesEngine;

/// Picks an action for `player` from the current state.
///
/// Returns `None` when the player has nothing to do.
pub trait Agent {
    fn choose_action(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
        player: &PlayerId,
    ) -> Option<Action>;
}

/// Uniform random agent.
///
/// Selects uniformly from legal actions using its own RNG stream, so it
/// never disturbs the deck shuffle.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_action(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
        player: &PlayerId,
    ) -> Option<Action> {
        let actions = engine.legal_actions(state, player);
        self.rng.choose(&actions).cloned()
    }
}
