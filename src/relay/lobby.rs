//! Lobby data: codes, members and the hosted match.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, PlayerId};

/// Characters used in lobby codes. No `I`, `O`, `0` or `1`.
pub const CODE_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of a lobby code.
pub const CODE_LENGTH: usize = 6;

/// Short code players type to find a lobby.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobbyCode(String);

impl LobbyCode {
    /// Random code drawn from `CODE_ALPHABET`.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let alphabet = CODE_ALPHABET.as_bytes();
        let code = (0..CODE_LENGTH)
            .map(|_| char::from(alphabet[rng.gen_range_usize(0..alphabet.len())]))
            .collect();
        Self(code)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LobbyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LobbyCode {
    fn from(code: &str) -> Self {
        Self(code.to_ascii_uppercase())
    }
}

/// Lobby lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LobbyStatus {
    /// Gathering players; joins allowed.
    Waiting,
    Playing,
    /// Match finished or abandoned.
    Ended,
}

/// Someone sitting in a lobby.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: PlayerId,
    pub name: String,
    pub is_host: bool,
    pub is_ready: bool,
}

impl Member {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_host: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_host,
            is_ready: false,
        }
    }
}

/// A lobby and, once everyone is ready, its match.
#[derive(Clone, Debug)]
pub struct Lobby {
    pub code: LobbyCode,
    /// Join order; becomes the seating order.
    pub members: Vec<Member>,
    pub status: LobbyStatus,
    pub game: Option<GameState>,
    pub created_at: Instant,
}

impl Lobby {
    #[must_use]
    pub fn new(code: LobbyCode, host: Member, created_at: Instant) -> Self {
        Self {
            code,
            members: vec![host],
            status: LobbyStatus::Waiting,
            game: None,
            created_at,
        }
    }

    #[must_use]
    pub fn member(&self, id: &PlayerId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    #[must_use]
    pub fn is_member(&self, id: &PlayerId) -> bool {
        self.member(id).is_some()
    }

    #[must_use]
    pub fn host(&self) -> Option<&Member> {
        self.members.iter().find(|m| m.is_host)
    }

    /// At least two members and every one of them ready.
    #[must_use]
    pub fn all_ready(&self) -> bool {
        self.members.len() >= 2 && self.members.iter().all(|m| m.is_ready)
    }
}
