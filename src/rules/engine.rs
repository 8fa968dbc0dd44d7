//! Rules engine trait and the Love Letter round engine.
//!
//! `RulesEngine` is the seam agents and the relay drive a match through:
//! - What actions are legal
//! - How actions modify state
//! - Whether the match is over
//!
//! `RoundEngine` implements it on top of the turn controller and scoring,
//! and adds match setup and the deal between rounds.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{self, Card, Rank, TargetRule};
use crate::core::{
    Action, CardPlay, GameRng, GameState, MatchConfig, Outcome, Player, PlayerId, Rejection,
    RuleError, TurnPhase,
};
use crate::effects::{countess_forced, valid_targets};

use super::turn;

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub winner: PlayerId,
    /// Final token counts by seat.
    pub tokens: Vec<u32>,
    pub rounds: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        &self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the player can't act
/// - `apply_action`: Must be deterministic given the state (RNG included)
/// - `is_terminal`: Return None while the match continues
pub trait RulesEngine {
    /// Get the match configuration.
    fn config(&self) -> &MatchConfig;

    /// Every action `player` may legally take right now.
    fn legal_actions(&self, state: &GameState, player: &PlayerId) -> Vec<Action>;

    /// Apply an action, producing a new snapshot or a rejection.
    fn apply_action(&self, state: &GameState, player: &PlayerId, action: &Action) -> Outcome;

    /// Check if the match is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `action` is among the legal actions for `player`.
    fn is_legal(&self, state: &GameState, player: &PlayerId, action: &Action) -> bool {
        self.legal_actions(state, player).contains(action)
    }
}

/// The Love Letter rules, parameterized by a `MatchConfig`.
#[derive(Clone, Debug, Default)]
pub struct RoundEngine {
    config: MatchConfig,
}

impl RoundEngine {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Seat the players, shuffle with `rng`, burn and deal round 1.
    ///
    /// An empty name becomes `Player N`.
    pub fn initialize_game<I, N>(&self, ids: &[I], names: &[N], rng: GameRng) -> Result<GameState, RuleError>
    where
        I: AsRef<str>,
        N: AsRef<str>,
    {
        let mut state = GameState::new(self.seat(ids, names)?, rng);
        cards::restock(&mut state);
        self.open_round(&mut state);
        Ok(state)
    }

    /// Like `initialize_game`, but dealing from `deck` as given (top = end).
    ///
    /// `rng` only shuffles the later rounds.
    pub fn initialize_game_with_deck<I, N>(
        &self,
        ids: &[I],
        names: &[N],
        deck: Vec<Card>,
        rng: GameRng,
    ) -> Result<GameState, RuleError>
    where
        I: AsRef<str>,
        N: AsRef<str>,
    {
        let players = self.seat(ids, names)?;
        if !cards::is_full_deck(&deck) {
            return Err(RuleError::InvalidDeck);
        }
        let mut state = GameState::new(players, rng);
        state.deck = Vector::from(deck);
        self.open_round(&mut state);
        Ok(state)
    }

    pub fn draw_card(&self, state: &GameState, player: &PlayerId) -> Outcome {
        turn::draw(state, player, &self.config)
    }

    pub fn play_card(&self, state: &GameState, player: &PlayerId, play: &CardPlay) -> Outcome {
        turn::play(state, player, play, &self.config)
    }

    /// Deal the next round. Tokens carry over; everything else resets.
    pub fn start_new_round(&self, state: &GameState) -> Outcome {
        if state.is_game_over {
            return Err(Rejection::new(RuleError::GameOver, state));
        }
        if state.turn_phase != TurnPhase::RoundEnd {
            return Err(Rejection::new(RuleError::RoundInProgress, state));
        }

        let mut next = state.clone();
        next.round_number += 1;
        for index in 0..next.player_count() {
            next.player_mut(index).reset_round();
        }
        next.reveals.clear();
        next.round_winner = None;
        next.burned_card = None;
        next.record(None, Action::StartNewRound);
        cards::restock(&mut next);
        self.open_round(&mut next);
        Ok(next)
    }

    /// Validate the roster and build the seats.
    fn seat<I, N>(&self, ids: &[I], names: &[N]) -> Result<Vec<Player>, RuleError>
    where
        I: AsRef<str>,
        N: AsRef<str>,
    {
        // Bounds hold even for a config that never went through `validate`.
        let min = self.config.min_players.max(2);
        let max = self.config.max_players.min(cards::DECK_SIZE - 2);
        if !(min..=max).contains(&ids.len()) {
            return Err(RuleError::PlayerCount {
                count: ids.len(),
                min,
                max,
            });
        }
        if ids.len() != names.len() {
            return Err(RuleError::NameCountMismatch {
                ids: ids.len(),
                names: names.len(),
            });
        }

        let mut players: Vec<Player> = Vec::with_capacity(ids.len());
        for (seat, (id, name)) in ids.iter().zip(names).enumerate() {
            let id = PlayerId::new(id.as_ref());
            if players.iter().any(|p| p.id == id) {
                return Err(RuleError::DuplicatePlayer(id));
            }
            let name = match name.as_ref().trim() {
                "" => format!("Player {}", seat + 1),
                name => name.to_string(),
            };
            players.push(Player::new(id, name));
        }
        Ok(players)
    }

    /// Burn, deal and hand the first turn to seat 0.
    fn open_round(&self, state: &mut GameState) {
        cards::deal(state, self.config.burns_card(state.player_count()));
        state.current_player_index = 0;
        state.turn_phase = TurnPhase::Draw;

        state.log(format!("Round {} begins.", state.round_number));
        let line = format!("It is {}'s turn.", state.current_player().name);
        state.log(line);
        tracing::debug!(
            round = state.round_number,
            players = state.player_count(),
            deck = state.deck.len(),
            "round dealt"
        );
    }

    /// Every play the current player could make in the play phase.
    fn card_plays(state: &GameState, index: usize) -> Vec<Action> {
        let hand = &state.players[index].hand;
        let mut plays = Vec::new();

        for card in hand.iter().filter(|c| !countess_forced(hand, c)) {
            if card.rank.target_rule() == TargetRule::None {
                plays.push(CardPlay::new(card.id.clone()));
                continue;
            }

            let targets = valid_targets(state, index, card.rank);
            if targets.is_empty() {
                // Nobody can be targeted; the card is spent to no effect.
                plays.push(CardPlay::new(card.id.clone()));
                continue;
            }

            for target in targets {
                let play = CardPlay::new(card.id.clone()).targeting(target);
                if card.rank == Rank::Guard {
                    plays.extend(
                        Rank::ALL
                            .iter()
                            .filter(|&&r| r != Rank::Guard)
                            .map(|&guess| play.clone().guessing(guess)),
                    );
                } else {
                    plays.push(play);
                }
            }
        }

        plays.into_iter().map(Action::Play).collect()
    }
}

impl RulesEngine for RoundEngine {
    fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: &PlayerId) -> Vec<Action> {
        if state.is_game_over {
            return Vec::new();
        }
        if state.turn_phase == TurnPhase::RoundEnd {
            return match state.player_index(player) {
                Some(_) => vec![Action::StartNewRound],
                None => Vec::new(),
            };
        }

        match turn::check_actor(state, player, state.turn_phase) {
            Ok(index) => match state.turn_phase {
                TurnPhase::Draw => vec![Action::Draw],
                TurnPhase::Play => Self::card_plays(state, index),
                _ => Vec::new(),
            },
            Err(_) => Vec::new(),
        }
    }

    fn apply_action(&self, state: &GameState, player: &PlayerId, action: &Action) -> Outcome {
        match action {
            Action::Draw => self.draw_card(state, player),
            Action::Play(play) => self.play_card(state, player, play),
            Action::StartNewRound => {
                if state.player_index(player).is_none() {
                    return Err(Rejection::new(RuleError::UnknownPlayer(player.clone()), state));
                }
                self.start_new_round(state)
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_game_over {
            return None;
        }
        Some(GameResult {
            winner: state.winner.clone()?,
            tokens: state.players.iter().map(|p| p.tokens).collect(),
            rounds: state.round_number,
        })
    }
}
