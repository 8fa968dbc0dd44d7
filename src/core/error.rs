//! Rule violations and the rejection result.
//!
//! An illegal action never changes the game. The engine hands back a
//! `Rejection` carrying the reason plus the untouched input state (with one
//! log line appended), so callers can tell "rejected" apart from "played,
//! but the effect fizzled".

use thiserror::Error;

use super::player::PlayerId;
use super::state::{GameState, TurnPhase};
use crate::cards::{CardId, Rank};

/// Why an action was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("a match needs {min} to {max} players, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("got {ids} player ids but {names} player names")]
    NameCountMismatch { ids: usize, names: usize },

    #[error("player id {0} is used more than once")]
    DuplicatePlayer(PlayerId),

    #[error("the deck is not a permutation of the 16 Love Letter cards")]
    InvalidDeck,

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("{0} is out of this round")]
    PlayerEliminated(PlayerId),

    #[error("expected the {expected} phase, but the game is in the {actual} phase")]
    WrongPhase { expected: TurnPhase, actual: TurnPhase },

    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),

    #[error("the Countess must be discarded while holding the {held}")]
    CountessRequired { held: Rank },

    #[error("the {rank} cannot target its own player")]
    SelfTarget { rank: Rank },

    #[error("the Guard cannot name another Guard")]
    GuardGuess,

    #[error("{value} is not a card rank")]
    InvalidRank { value: u8 },

    #[error("the match is over")]
    GameOver,

    #[error("the current round is still in progress")]
    RoundInProgress,
}

/// A refused action: the reason plus the unchanged state.
///
/// `state` equals the input apart from one appended `game_log` line.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("action rejected: {reason}")]
pub struct Rejection {
    pub reason: RuleError,
    pub state: Box<GameState>,
}

impl Rejection {
    /// Build a rejection from the input state, logging the reason.
    #[must_use]
    pub fn new(reason: RuleError, state: &GameState) -> Self {
        let mut state = state.clone();
        state.log(format!("Rejected: {reason}."));
        tracing::debug!(%reason, round = state.round_number, "action rejected");
        Self {
            reason,
            state: Box::new(state),
        }
    }

    /// Take the logged, otherwise unchanged state back.
    #[must_use]
    pub fn into_state(self) -> GameState {
        *self.state
    }
}

/// Result of every engine transition.
pub type Outcome = Result<GameState, Rejection>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = RuleError::NotYourTurn {
            player: "p2".into(),
            current: "p1".into(),
        };
        assert_eq!(err.to_string(), "it is p1's turn, not p2's");

        let err = RuleError::CountessRequired { held: Rank::King };
        assert_eq!(
            err.to_string(),
            "the Countess must be discarded while holding the King (6)"
        );
    }

    #[test]
    fn test_wrong_phase_message() {
        let err = RuleError::WrongPhase {
            expected: TurnPhase::Draw,
            actual: TurnPhase::Play,
        };
        assert_eq!(
            err.to_string(),
            "expected the draw phase, but the game is in the play phase"
        );
    }
}
