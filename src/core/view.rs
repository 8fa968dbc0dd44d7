//! Per-seat redacted view of a `GameState`.
//!
//! `GameState` holds everything, including every hand and the deck order.
//! Anything sent to a client goes through `PlayerView::for_player` instead:
//! - Opponents' hands become hidden placeholders (the count stays visible)
//! - The deck becomes a count; the burned card is never shown
//! - Only Priest reveals addressed to the viewer are included
//! - At round end, hands of players still in the round are shown to all
//! - The RNG and action history are dropped

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use super::state::{GameState, Reveal, TurnPhase};
use crate::cards::Card;

/// A hand slot as seen by one viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "visibility", rename_all = "camelCase")]
pub enum VisibleCard {
    Hidden,
    Shown { card: Card },
}

/// One seat as seen by the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<VisibleCard>,
    pub discard_pile: Vec<Card>,
    pub is_protected: bool,
    pub is_eliminated: bool,
    pub tokens: u32,
}

/// Everything one player is allowed to know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub players: Vec<SeatView>,
    pub deck_size: usize,
    pub has_burned_card: bool,
    pub current_player_index: usize,
    pub turn_phase: TurnPhase,
    pub round_number: u32,
    pub is_game_over: bool,
    pub winner: Option<PlayerId>,
    pub round_winner: Option<PlayerId>,
    pub game_log: Vec<String>,
    /// Cards this viewer has seen with a Priest this round.
    pub known_cards: Vec<Reveal>,
}

impl PlayerView {
    /// Redact `state` for `viewer`.
    ///
    /// An id that is not seated gets a spectator view: no hands at all
    /// until showdown.
    #[must_use]
    pub fn for_player(state: &GameState, viewer: &PlayerId) -> Self {
        let showdown = state.is_round_over();

        let players = state
            .players
            .iter()
            .map(|p| seat_view(p, &p.id == viewer || (showdown && p.is_active())))
            .collect();

        Self {
            viewer: viewer.clone(),
            players,
            deck_size: state.deck.len(),
            has_burned_card: state.burned_card.is_some(),
            current_player_index: state.current_player_index,
            turn_phase: state.turn_phase,
            round_number: state.round_number,
            is_game_over: state.is_game_over,
            winner: state.winner.clone(),
            round_winner: state.round_winner.clone(),
            game_log: state.game_log.iter().cloned().collect(),
            known_cards: state.reveals_for(viewer).cloned().collect(),
        }
    }

    /// The viewer's own seat, if seated.
    #[must_use]
    pub fn own_seat(&self) -> Option<&SeatView> {
        self.players.iter().find(|s| s.id == self.viewer)
    }
}

fn seat_view(player: &Player, visible: bool) -> SeatView {
    let hand = player
        .hand
        .iter()
        .map(|card| {
            if visible {
                VisibleCard::Shown { card: card.clone() }
            } else {
                VisibleCard::Hidden
            }
        })
        .collect();

    SeatView {
        id: player.id.clone(),
        name: player.name.clone(),
        hand,
        discard_pile: player.discard_pile.clone(),
        is_protected: player.is_protected,
        is_eliminated: player.is_eliminated,
        tokens: player.tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::core::GameRng;

    fn dealt_state() -> GameState {
        let mut state = GameState::new(
            [
                Player::new("p1".into(), "Ada"),
                Player::new("p2".into(), "Bo"),
            ],
            GameRng::new(3),
        );
        state.player_mut(0).hand.push(Card::new("king-1", Rank::King));
        state.player_mut(1).hand.push(Card::new("princess-1", Rank::Princess));
        state.deck.push_back(Card::new("guard-1", Rank::Guard));
        state.burned_card = Some(Card::new("guard-2", Rank::Guard));
        state
    }

    #[test]
    fn test_opponent_hand_is_hidden() {
        let state = dealt_state();
        let view = PlayerView::for_player(&state, &"p1".into());

        assert_eq!(
            view.players[0].hand,
            vec![VisibleCard::Shown {
                card: Card::new("king-1", Rank::King)
            }]
        );
        assert_eq!(view.players[1].hand, vec![VisibleCard::Hidden]);
        assert_eq!(view.deck_size, 1);
        assert!(view.has_burned_card);
    }

    #[test]
    fn test_serialized_view_never_contains_hidden_cards() {
        let state = dealt_state();
        let json = serde_json::to_string(&PlayerView::for_player(&state, &"p1".into())).unwrap();

        assert!(!json.contains("princess-1"));
        assert!(!json.contains("guard-2"));
        assert!(!json.contains("guard-1"));
        assert!(json.contains("king-1"));
    }

    #[test]
    fn test_reveals_are_private() {
        let mut state = dealt_state();
        state.reveals.push_back(Reveal {
            viewer: "p1".into(),
            subject: "p2".into(),
            card: Card::new("princess-1", Rank::Princess),
        });

        let seen = PlayerView::for_player(&state, &"p1".into());
        let other = PlayerView::for_player(&state, &"p2".into());

        assert_eq!(seen.known_cards.len(), 1);
        assert!(other.known_cards.is_empty());
    }

    #[test]
    fn test_showdown_reveals_active_hands() {
        let mut state = dealt_state();
        state.turn_phase = TurnPhase::RoundEnd;

        let view = PlayerView::for_player(&state, &"p1".into());
        assert!(matches!(view.players[1].hand[0], VisibleCard::Shown { .. }));
    }

    #[test]
    fn test_spectator_sees_no_hands() {
        let state = dealt_state();
        let view = PlayerView::for_player(&state, &"watcher".into());

        assert!(view.own_seat().is_none());
        assert!(view
            .players
            .iter()
            .all(|s| s.hand.iter().all(|c| *c == VisibleCard::Hidden)));
    }
}
