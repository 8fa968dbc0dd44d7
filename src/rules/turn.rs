//! Turn controller: the draw → play → effect → next-turn state machine.
//!
//! Each transition checks its preconditions against the input snapshot and
//! only then clones it. A failed check becomes a `Rejection`; nothing about
//! the input is touched.

use crate::cards::Card;
use crate::core::{
    Action, CardPlay, GameState, MatchConfig, Outcome, PlayerId, Rejection, RuleError, TurnPhase,
};
use crate::effects::{countess_forced, validate_choice, EffectResolver};

use super::scoring::{score_round, RoundResult};

/// Confirm `player` may act in `expected` phase, returning their seat.
///
/// Checked in order: match over, unknown player, out of turn, eliminated,
/// wrong phase.
pub fn check_actor(
    state: &GameState,
    player: &PlayerId,
    expected: TurnPhase,
) -> Result<usize, RuleError> {
    if state.is_game_over {
        return Err(RuleError::GameOver);
    }
    let index = state
        .player_index(player)
        .ok_or_else(|| RuleError::UnknownPlayer(player.clone()))?;
    if index != state.current_player_index {
        return Err(RuleError::NotYourTurn {
            player: player.clone(),
            current: state.current_player().id.clone(),
        });
    }
    if state.players[index].is_eliminated {
        return Err(RuleError::PlayerEliminated(player.clone()));
    }
    if state.turn_phase != expected {
        return Err(RuleError::WrongPhase {
            expected,
            actual: state.turn_phase,
        });
    }
    Ok(index)
}

/// Draw the top card for the current player.
///
/// An empty deck ends the round instead; the drawing player gets nothing.
pub fn draw(state: &GameState, player: &PlayerId, config: &MatchConfig) -> Outcome {
    let index = check_actor(state, player, TurnPhase::Draw).map_err(|e| Rejection::new(e, state))?;

    let mut next = state.clone();
    next.record(Some(player.clone()), Action::Draw);

    let Some(card) = next.deck.pop_back() else {
        next.log("The deck is empty. The round is over.");
        end_round(&mut next, config);
        return Ok(next);
    };

    let seat = next.player_mut(index);
    seat.hand.push(card);
    let line = format!("{} draws a card.", seat.name);
    next.log(line);
    next.turn_phase = TurnPhase::Play;

    tracing::debug!(%player, deck = next.deck.len(), "card drawn");
    Ok(next)
}

/// Discard a card from the current player's hand and resolve its effect.
pub fn play(state: &GameState, player: &PlayerId, choice: &CardPlay, config: &MatchConfig) -> Outcome {
    let index = check_actor(state, player, TurnPhase::Play).map_err(|e| Rejection::new(e, state))?;
    let card = playable_card(state, index, choice).map_err(|e| Rejection::new(e, state))?;

    let mut next = state.clone();
    let seat = next.player_mut(index);
    if seat.hand.take(&card.id).is_none() {
        return Err(Rejection::new(RuleError::CardNotInHand(card.id), state));
    }
    seat.discard_pile.push(card.clone());
    let line = format!("{} plays the {}.", seat.name, card.name());
    next.log(line);
    next.record(Some(player.clone()), Action::Play(choice.clone()));

    next.turn_phase = TurnPhase::Effect;
    let outcome = EffectResolver::resolve(&mut next, index, &card, choice);
    tracing::debug!(%player, card = %card.id, ?outcome, "card played");

    if next.active_count() <= 1 {
        end_round(&mut next, config);
    } else {
        advance(&mut next, config);
    }
    Ok(next)
}

/// The card `choice` names, once the Countess lock and target rules allow it.
fn playable_card(state: &GameState, index: usize, choice: &CardPlay) -> Result<Card, RuleError> {
    let seat = &state.players[index];
    let card = seat
        .hand
        .get(&choice.card)
        .cloned()
        .ok_or_else(|| RuleError::CardNotInHand(choice.card.clone()))?;

    if countess_forced(&seat.hand, &card) {
        return Err(RuleError::CountessRequired { held: card.rank });
    }
    validate_choice(&seat.id, &card, choice)?;
    Ok(card)
}

/// Pass the turn to the next active seat after the current one.
///
/// The incoming player's Handmaid protection lapses as their turn begins.
pub fn advance(state: &mut GameState, config: &MatchConfig) {
    state.turn_phase = TurnPhase::NextTurn;

    let count = state.player_count();
    let from = state.current_player_index;
    let Some(index) = (1..=count)
        .map(|step| (from + step) % count)
        .find(|&i| !state.players[i].is_eliminated)
    else {
        tracing::warn!(round = state.round_number, "no active player to pass the turn to");
        end_round(state, config);
        return;
    };

    state.current_player_index = index;
    let seat = state.player_mut(index);
    seat.is_protected = false;
    let line = format!("It is {}'s turn.", seat.name);
    state.turn_phase = TurnPhase::Draw;
    state.log(line);
}

/// Close the round and score it.
pub fn end_round(state: &mut GameState, config: &MatchConfig) -> RoundResult {
    state.turn_phase = TurnPhase::RoundEnd;
    score_round(state, config)
}
