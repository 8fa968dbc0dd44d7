//! Player identification and per-player round state.
//!
//! ## PlayerId
//!
//! Opaque, caller-supplied identifier (a session id, a user id...). Stable
//! for the whole match.
//!
//! ## Player
//!
//! Seat data: hand, discard pile, protection/elimination flags (round
//! scoped) and favor tokens (match scoped).

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Hand};

/// Player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// One settled card, plus the freshly drawn one during the play phase.
    pub hand: Hand,
    /// Discarded cards in play order. Append-only within a round.
    pub discard_pile: Vec<Card>,
    /// Handmaid protection; cleared when this player's next turn begins.
    pub is_protected: bool,
    /// Out of the current round.
    pub is_eliminated: bool,
    /// Favor tokens won so far in the match.
    pub tokens: u32,
}

impl Player {
    /// Create a player with empty round state and no tokens.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            discard_pile: Vec::new(),
            is_protected: false,
            is_eliminated: false,
            tokens: 0,
        }
    }

    /// Still in the current round.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_eliminated
    }

    /// Can be affected by another player's targeted effect.
    #[must_use]
    pub fn is_targetable(&self) -> bool {
        !self.is_eliminated && !self.is_protected
    }

    /// Sum of ranks in the discard pile (showdown tie-break).
    #[must_use]
    pub fn discard_total(&self) -> u32 {
        self.discard_pile.iter().map(|c| u32::from(c.rank.value())).sum()
    }

    /// Clear everything scoped to a single round. Tokens are kept.
    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.discard_pile.clear();
        self.is_protected = false;
        self.is_eliminated = false;
    }
}
