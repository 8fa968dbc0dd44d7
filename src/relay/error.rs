//! Relay errors.

use thiserror::Error;

use super::LobbyCode;
use crate::core::{PlayerId, Rejection, RuleError};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("lobby {0} does not exist")]
    UnknownLobby(LobbyCode),

    #[error("lobby {code} is full ({capacity} players)")]
    LobbyFull { code: LobbyCode, capacity: usize },

    #[error("lobby {0} is no longer accepting players")]
    NotWaiting(LobbyCode),

    #[error("{member} is already in lobby {code}")]
    AlreadyJoined { code: LobbyCode, member: PlayerId },

    #[error("{member} is not in lobby {code}")]
    NotAMember { code: LobbyCode, member: PlayerId },

    #[error("lobby {0} has no match in progress")]
    NotPlaying(LobbyCode),

    #[error("could not start the match: {0}")]
    Setup(#[from] RuleError),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}
