//! In-memory lobby manager.
//!
//! Holds every lobby and the match each one hosts. All mutations take
//! `&mut self`, so a server sharing one manager across connections wraps it
//! in a lock; the engine itself never sees two writers.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use super::{Lobby, LobbyCode, LobbyStatus, Member, RelayError, RelayEvent};
use crate::core::{Action, GameRng, PlayerId, PlayerView};
use crate::rules::{RoundEngine, RulesEngine};

/// Lobbies idle longer than this are dropped by `prune_idle`.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(2 * 60 * 60);

pub struct LobbyManager {
    engine: RoundEngine,
    lobbies: FxHashMap<LobbyCode, Lobby>,
    /// Lobby codes and per-match shuffle seeds.
    rng: GameRng,
}

impl LobbyManager {
    #[must_use]
    pub fn new(engine: RoundEngine, rng: GameRng) -> Self {
        Self {
            engine,
            lobbies: FxHashMap::default(),
            rng,
        }
    }

    #[must_use]
    pub fn lobby(&self, code: &LobbyCode) -> Option<&Lobby> {
        self.lobbies.get(code)
    }

    #[must_use]
    pub fn lobby_count(&self) -> usize {
        self.lobbies.len()
    }

    fn capacity(&self) -> usize {
        self.engine.config().max_players
    }

    fn lobby_mut(&mut self, code: &LobbyCode) -> Result<&mut Lobby, RelayError> {
        self.lobbies
            .get_mut(code)
            .ok_or_else(|| RelayError::UnknownLobby(code.clone()))
    }

    /// Open a lobby with `member` as host.
    pub fn create_lobby(&mut self, member: PlayerId, name: &str) -> (LobbyCode, Vec<RelayEvent>) {
        let mut code = LobbyCode::generate(&mut self.rng);
        while self.lobbies.contains_key(&code) {
            code = LobbyCode::generate(&mut self.rng);
        }

        let host = Member::new(member.clone(), name, true);
        self.lobbies
            .insert(code.clone(), Lobby::new(code.clone(), host, Instant::now()));
        tracing::info!(%code, host = %member, "lobby created");

        let events = vec![RelayEvent::LobbyCreated {
            code: code.clone(),
            host: member,
        }];
        (code, events)
    }

    pub fn join_lobby(
        &mut self,
        code: &LobbyCode,
        member: PlayerId,
        name: &str,
    ) -> Result<Vec<RelayEvent>, RelayError> {
        let capacity = self.capacity();
        let lobby = self.lobby_mut(code)?;

        if lobby.is_member(&member) {
            return Err(RelayError::AlreadyJoined {
                code: code.clone(),
                member,
            });
        }
        if lobby.members.len() >= capacity {
            return Err(RelayError::LobbyFull {
                code: code.clone(),
                capacity,
            });
        }
        if lobby.status != LobbyStatus::Waiting {
            return Err(RelayError::NotWaiting(code.clone()));
        }

        lobby.members.push(Member::new(member.clone(), name, false));
        tracing::info!(%code, player = %member, "player joined lobby");

        Ok(vec![RelayEvent::PlayerJoined {
            code: code.clone(),
            player: member,
            members: lobby.members.clone(),
        }])
    }

    /// Mark `member` ready. Starts the match once everyone is.
    pub fn set_ready(&mut self, code: &LobbyCode, member: &PlayerId) -> Result<Vec<RelayEvent>, RelayError> {
        let seed = self.rng.next_seed();
        let engine = self.engine.clone();
        let lobby = self.lobby_mut(code)?;

        let seat = lobby
            .members
            .iter_mut()
            .find(|m| &m.id == member)
            .ok_or_else(|| RelayError::NotAMember {
                code: code.clone(),
                member: member.clone(),
            })?;
        seat.is_ready = true;

        let mut events = vec![RelayEvent::PlayerReady {
            code: code.clone(),
            player: member.clone(),
            members: lobby.members.clone(),
        }];

        if lobby.status == LobbyStatus::Waiting && lobby.all_ready() {
            let ids: Vec<&str> = lobby.members.iter().map(|m| m.id.as_str()).collect();
            let names: Vec<&str> = lobby.members.iter().map(|m| m.name.as_str()).collect();
            let game = engine.initialize_game(&ids, &names, GameRng::new(seed))?;

            lobby.game = Some(game);
            lobby.status = LobbyStatus::Playing;
            tracing::info!(%code, players = lobby.members.len(), "match started");

            events.push(RelayEvent::GameStarted {
                code: code.clone(),
                players: lobby.members.iter().map(|m| m.id.clone()).collect(),
            });
        }

        Ok(events)
    }

    /// Apply one engine action from `member` to the lobby's match.
    ///
    /// A rejected action leaves the stored match untouched; only the
    /// submitter learns the reason, through the returned error.
    pub fn submit(
        &mut self,
        code: &LobbyCode,
        member: &PlayerId,
        action: &Action,
    ) -> Result<Vec<RelayEvent>, RelayError> {
        let engine = self.engine.clone();
        let lobby = self.lobby_mut(code)?;

        if !lobby.is_member(member) {
            return Err(RelayError::NotAMember {
                code: code.clone(),
                member: member.clone(),
            });
        }
        let game = match (lobby.status, lobby.game.as_ref()) {
            (LobbyStatus::Playing, Some(game)) => game,
            _ => return Err(RelayError::NotPlaying(code.clone())),
        };

        let next = engine.apply_action(game, member, action)?;

        let mut events = vec![RelayEvent::GameUpdated {
            code: code.clone(),
            round: next.round_number,
            phase: next.turn_phase,
        }];
        if next.is_game_over {
            lobby.status = LobbyStatus::Ended;
            tracing::info!(%code, winner = ?next.winner, "lobby match finished");
            events.push(RelayEvent::GameEnded {
                code: code.clone(),
                winner: next.winner.clone(),
            });
        }
        lobby.game = Some(next);

        Ok(events)
    }

    /// What `member` is allowed to see of the lobby's match.
    pub fn view(&self, code: &LobbyCode, member: &PlayerId) -> Result<PlayerView, RelayError> {
        let lobby = self
            .lobbies
            .get(code)
            .ok_or_else(|| RelayError::UnknownLobby(code.clone()))?;
        if !lobby.is_member(member) {
            return Err(RelayError::NotAMember {
                code: code.clone(),
                member: member.clone(),
            });
        }
        let game = lobby
            .game
            .as_ref()
            .ok_or_else(|| RelayError::NotPlaying(code.clone()))?;
        Ok(PlayerView::for_player(game, member))
    }

    /// Remove `member` from every lobby they sit in.
    ///
    /// Hosting passes to the first remaining member; empty lobbies close;
    /// a match in progress is abandoned.
    pub fn leave(&mut self, member: &PlayerId) -> Vec<RelayEvent> {
        let mut events = Vec::new();
        let mut emptied = Vec::new();

        for (code, lobby) in &mut self.lobbies {
            let Some(index) = lobby.members.iter().position(|m| &m.id == member) else {
                continue;
            };
            let leaving = lobby.members.remove(index);
            tracing::info!(%code, player = %member, "player left lobby");

            if lobby.members.is_empty() {
                emptied.push(code.clone());
                continue;
            }
            if leaving.is_host {
                lobby.members[0].is_host = true;
            }

            events.push(RelayEvent::PlayerLeft {
                code: code.clone(),
                player: member.clone(),
                members: lobby.members.clone(),
            });

            if lobby.status == LobbyStatus::Playing {
                lobby.status = LobbyStatus::Ended;
                events.push(RelayEvent::GameEnded {
                    code: code.clone(),
                    winner: None,
                });
            }
        }

        for code in emptied {
            self.lobbies.remove(&code);
            tracing::info!(%code, "lobby closed");
            events.push(RelayEvent::LobbyClosed { code });
        }
        events
    }

    /// Drop lobbies created more than `max_age` before `now`.
    pub fn prune_idle(&mut self, now: Instant, max_age: Duration) -> Vec<RelayEvent> {
        let stale: Vec<LobbyCode> = self
            .lobbies
            .values()
            .filter(|lobby| now.saturating_duration_since(lobby.created_at) > max_age)
            .map(|lobby| lobby.code.clone())
            .collect();

        stale
            .into_iter()
            .map(|code| {
                self.lobbies.remove(&code);
                tracing::info!(%code, "idle lobby pruned");
                RelayEvent::LobbyClosed { code }
            })
            .collect()
    }
}

impl Default for LobbyManager {
    fn default() -> Self {
        Self::new(RoundEngine::default(), GameRng::from_entropy())
    }
}
