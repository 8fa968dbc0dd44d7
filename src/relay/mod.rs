//! Transport-agnostic lobby relay.
//!
//! A `LobbyManager` groups connections into lobbies identified by short
//! codes, starts a match once every member is ready, feeds member actions
//! to the engine one at a time, and hands each member a redacted
//! `PlayerView`. Every mutation returns the `RelayEvent`s a socket layer
//! would broadcast; the manager itself does no I/O.

mod error;
mod event;
mod lobby;
mod manager;

pub use error::RelayError;
pub use event::RelayEvent;
pub use lobby::{Lobby, LobbyCode, LobbyStatus, Member, CODE_ALPHABET, CODE_LENGTH};
pub use manager::{LobbyManager, DEFAULT_MAX_AGE};
