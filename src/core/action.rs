//! Action representation.
//!
//! An `Action` is one of the three things a caller can ask the engine to do:
//! draw, play a card (with optional target and Guard guess), or deal the
//! next round. `ActionRecord` stores accepted actions in the match history.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardId, Rank};

/// A card play: which card to discard, plus the effect's choices.
///
/// ## Example
///
/// ```
/// use love_letter::cards::Rank;
/// use love_letter::core::CardPlay;
///
/// let play = CardPlay::new("guard-1").targeting("p2").guessing(Rank::Priest);
/// assert_eq!(play.guess, Some(Rank::Priest));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPlay {
    /// The card to discard from hand.
    pub card: CardId,
    /// Effect target, for ranks that take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<PlayerId>,
    /// Guessed rank, for the Guard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess: Option<Rank>,
}

impl CardPlay {
    /// Play a card with no target.
    #[must_use]
    pub fn new(card: impl Into<CardId>) -> Self {
        Self {
            card: card.into(),
            target: None,
            guess: None,
        }
    }

    /// Set the target (builder pattern).
    #[must_use]
    pub fn targeting(mut self, target: impl Into<PlayerId>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the Guard guess (builder pattern).
    #[must_use]
    pub fn guessing(mut self, rank: Rank) -> Self {
        self.guess = Some(rank);
        self
    }
}

/// A complete engine action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Draw the top card of the deck.
    Draw,
    /// Discard a card and resolve its effect.
    Play(CardPlay),
    /// Deal the next round after a round has ended.
    StartNewRound,
}

/// An accepted action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// Acting player. `None` for round setup.
    pub player: Option<PlayerId>,
    /// The action taken.
    pub action: Action,
    /// Round number when the action was taken.
    pub round: u32,
    /// Position in the match history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Option<PlayerId>, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
