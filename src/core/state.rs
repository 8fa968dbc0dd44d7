//! Game state: the aggregate root passed through every transition.
//!
//! ## GameState
//!
//! Complete match state including hidden information:
//! - Seats in fixed turn order, with hands and discard piles
//! - The draw deck (top = end) and the burned card
//! - Turn phase, round number, winners
//! - Public log, private Priest reveals, accepted-action history
//! - The shuffle RNG
//!
//! Uses `im` persistent vectors so each transition can clone its input in
//! O(1) and hand back a fresh snapshot. For what a single seat is allowed to
//! see, see `PlayerView`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::player::{Player, PlayerId};
use super::rng::GameRng;
use crate::cards::Card;

/// Phase of the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnPhase {
    /// The current player must draw.
    Draw,
    /// The current player holds two cards and must discard one.
    Play,
    /// A discarded card's effect is resolving.
    Effect,
    /// Passing the turn to the next active seat.
    NextTurn,
    /// The round has been scored; waiting for the next deal.
    RoundEnd,
    /// A player reached the token threshold. Terminal.
    GameEnd,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::Draw => "draw",
            TurnPhase::Play => "play",
            TurnPhase::Effect => "effect",
            TurnPhase::NextTurn => "nextTurn",
            TurnPhase::RoundEnd => "roundEnd",
            TurnPhase::GameEnd => "gameEnd",
        };
        f.write_str(name)
    }
}

/// A card privately shown to one player by a Priest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reveal {
    /// Who looked.
    pub viewer: PlayerId,
    /// Whose hand was looked at.
    pub subject: PlayerId,
    /// The card seen.
    pub card: Card,
}

/// Full match state including private information.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Seats in turn order. Fixed for the match.
    pub players: Vector<Player>,
    /// Draw pile; the top card is the last element.
    pub deck: Vector<Card>,
    /// Index into `players` of the seat whose turn it is.
    pub current_player_index: usize,
    /// Card set aside face down (fewer than four players). Never revealed.
    pub burned_card: Option<Card>,
    pub is_game_over: bool,
    /// Match winner.
    pub winner: Option<PlayerId>,
    /// Winner of the most recently scored round.
    pub round_winner: Option<PlayerId>,
    pub turn_phase: TurnPhase,
    /// 1-based.
    pub round_number: u32,
    /// Public, append-only event log.
    pub game_log: Vector<String>,
    /// Private Priest reveals for the current round.
    pub reveals: Vector<Reveal>,
    /// Every accepted action in the match.
    pub history: Vector<ActionRecord>,
    /// Shuffle stream for the following rounds.
    pub rng: GameRng,
}

impl GameState {
    /// Create an undealt round-1 state for the given seats.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = Player>, rng: GameRng) -> Self {
        Self {
            players: players.into_iter().collect(),
            deck: Vector::new(),
            current_player_index: 0,
            burned_card: None,
            is_game_over: false,
            winner: None,
            round_winner: None,
            turn_phase: TurnPhase::Draw,
            round_number: 1,
            game_log: Vector::new(),
            reveals: Vector::new(),
            history: Vector::new(),
            rng,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Seat index of a player.
    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Mutable access to a seat.
    pub fn player_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    /// Players still in the round, in seating order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    /// Cards accounted for: deck, hands, discards and the burned card.
    ///
    /// Always 16 once a round has been dealt.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|p| p.hand.len() + p.discard_pile.len())
            .sum();
        self.deck.len() + held + usize::from(self.burned_card.is_some())
    }

    /// Whether the round has been scored.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        matches!(self.turn_phase, TurnPhase::RoundEnd | TurnPhase::GameEnd)
    }

    /// Reveals addressed to one viewer.
    pub fn reveals_for<'a>(&'a self, viewer: &'a PlayerId) -> impl Iterator<Item = &'a Reveal> {
        self.reveals.iter().filter(move |r| &r.viewer == viewer)
    }

    /// Append a line to the public log.
    pub fn log(&mut self, line: impl Into<String>) {
        self.game_log.push_back(line.into());
    }

    /// Record an accepted action in the match history.
    pub fn record(&mut self, player: Option<PlayerId>, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, self.round_number, sequence));
    }
}
