//! Events a transport would broadcast after each lobby mutation.

use serde::{Deserialize, Serialize};

use super::{LobbyCode, Member};
use crate::core::{PlayerId, TurnPhase};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayEvent {
    LobbyCreated {
        code: LobbyCode,
        host: PlayerId,
    },
    PlayerJoined {
        code: LobbyCode,
        player: PlayerId,
        members: Vec<Member>,
    },
    PlayerReady {
        code: LobbyCode,
        player: PlayerId,
        members: Vec<Member>,
    },
    GameStarted {
        code: LobbyCode,
        players: Vec<PlayerId>,
    },
    /// A new snapshot is available; clients fetch their own view.
    GameUpdated {
        code: LobbyCode,
        round: u32,
        phase: TurnPhase,
    },
    /// `winner` is `None` when the match was abandoned.
    GameEnded {
        code: LobbyCode,
        winner: Option<PlayerId>,
    },
    PlayerLeft {
        code: LobbyCode,
        player: PlayerId,
        members: Vec<Member>,
    },
    LobbyClosed {
        code: LobbyCode,
    },
}

impl RelayEvent {
    /// The lobby this event concerns.
    #[must_use]
    pub fn code(&self) -> &LobbyCode {
        match self {
            RelayEvent::LobbyCreated { code, .. }
            | RelayEvent::PlayerJoined { code, .. }
            | RelayEvent::PlayerReady { code, .. }
            | RelayEvent::GameStarted { code, .. }
            | RelayEvent::GameUpdated { code, .. }
            | RelayEvent::GameEnded { code, .. }
            | RelayEvent::PlayerLeft { code, .. }
            | RelayEvent::LobbyClosed { code } => code,
        }
    }
}
