//! Round scoring and match-end detection.
//!
//! Showdown order:
//! 1. A lone survivor wins outright.
//! 2. Otherwise the highest card in hand wins.
//! 3. Equal highest cards: the larger discard-pile total wins.
//! 4. Still equal: nobody scores this round.
//!
//! The winner gains one token. The match ends as soon as a seat holds the
//! threshold for the player count; seats are checked in seating order, so
//! the first qualifying seat wins.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::{GameState, MatchConfig, PlayerId, TurnPhase};

/// How a round was decided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RoundResult {
    /// Everyone else was eliminated.
    LastStanding { winner: PlayerId },
    /// Highest card at showdown.
    HighestCard { winner: PlayerId, rank: Rank },
    /// Highest card was shared; decided on discard totals.
    TieBreak { winner: PlayerId, discard_total: u32 },
    /// No winner: nobody left, or a perfect tie.
    Draw,
}

impl RoundResult {
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        match self {
            RoundResult::LastStanding { winner }
            | RoundResult::HighestCard { winner, .. }
            | RoundResult::TieBreak { winner, .. } => Some(winner),
            RoundResult::Draw => None,
        }
    }
}

/// Decide the round from the current state without changing it.
#[must_use]
pub fn determine_round_winner(state: &GameState) -> RoundResult {
    let active: Vec<_> = state.active_players().collect();

    if let [survivor] = active.as_slice() {
        return RoundResult::LastStanding {
            winner: survivor.id.clone(),
        };
    }

    // A player left cardless by a Prince cannot win on cards.
    let holdings: Vec<_> = active
        .iter()
        .filter_map(|p| p.hand.iter().map(|c| c.rank).max().map(|rank| (*p, rank)))
        .collect();

    let Some(best) = holdings.iter().map(|(_, rank)| *rank).max() else {
        return RoundResult::Draw;
    };

    let leaders: Vec<_> = holdings
        .iter()
        .filter(|(_, rank)| *rank == best)
        .map(|(p, _)| *p)
        .collect();

    if let [winner] = leaders.as_slice() {
        return RoundResult::HighestCard {
            winner: winner.id.clone(),
            rank: best,
        };
    }

    let top_total = leaders.iter().map(|p| p.discard_total()).max().unwrap_or(0);
    let mut on_top = leaders.iter().filter(|p| p.discard_total() == top_total);
    match (on_top.next(), on_top.next()) {
        (Some(winner), None) => RoundResult::TieBreak {
            winner: winner.id.clone(),
            discard_total: top_total,
        },
        _ => RoundResult::Draw,
    }
}

/// First seat, in seating order, holding at least the winning threshold.
#[must_use]
pub fn match_winner(state: &GameState, config: &MatchConfig) -> Option<usize> {
    let needed = config.tokens_to_win(state.player_count());
    state.players.iter().position(|p| p.tokens >= needed)
}

/// Score a finished round: award the token, then check for a match winner.
///
/// Leaves the state in `RoundEnd`, or `GameEnd` if the match is decided.
pub fn score_round(state: &mut GameState, config: &MatchConfig) -> RoundResult {
    state.turn_phase = TurnPhase::RoundEnd;
    let result = determine_round_winner(state);

    state.round_winner = result.winner().cloned();
    match state
        .round_winner
        .as_ref()
        .and_then(|id| state.player_index(id))
    {
        Some(index) => {
            let winner = state.player_mut(index);
            winner.tokens += 1;
            let line = format!("{} wins the round and now has {} tokens.", winner.name, winner.tokens);
            state.log(line);
        }
        None => state.log("Perfect tie. Nobody wins a token this round."),
    }
    tracing::info!(round = state.round_number, ?result, "round scored");

    if let Some(index) = match_winner(state, config) {
        let champion = &state.players[index];
        let (id, line) = (
            champion.id.clone(),
            format!("{} wins the match with {} tokens!", champion.name, champion.tokens),
        );
        state.is_game_over = true;
        state.winner = Some(id.clone());
        state.turn_phase = TurnPhase::GameEnd;
        state.log(line);
        tracing::info!(winner = %id, rounds = state.round_number, "match over");
    }

    result
}
