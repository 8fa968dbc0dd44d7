//! Effect targeting.
//!
//! Two separate questions:
//! - Is the *choice* legal? Naming yourself with a Guard, Priest, Baron or
//!   King, or guessing Guard with a Guard, is an illegal action and the
//!   whole play is refused.
//! - Does the named target *accept* the effect? A missing, unknown,
//!   eliminated or protected target makes the effect fizzle, but the play
//!   stands.

use crate::cards::{Card, Rank, TargetRule};
use crate::core::{CardPlay, GameState, PlayerId, RuleError};

use super::FizzleReason;

/// Reject plays whose choices are illegal for the card's rank.
pub fn validate_choice(actor: &PlayerId, card: &Card, play: &CardPlay) -> Result<(), RuleError> {
    if card.rank == Rank::Guard && play.guess == Some(Rank::Guard) {
        return Err(RuleError::GuardGuess);
    }

    if card.rank.target_rule() == TargetRule::Opponent && play.target.as_ref() == Some(actor) {
        return Err(RuleError::SelfTarget { rank: card.rank });
    }

    Ok(())
}

/// Resolve the named target to a seat index, or say why the effect fizzles.
pub fn locate_target(state: &GameState, target: Option<&PlayerId>) -> Result<usize, FizzleReason> {
    let target = target.ok_or(FizzleReason::NoTarget)?;
    let index = state
        .player_index(target)
        .ok_or(FizzleReason::UnknownTarget)?;
    let player = &state.players[index];

    if player.is_eliminated {
        Err(FizzleReason::TargetEliminated)
    } else if player.is_protected {
        Err(FizzleReason::TargetProtected)
    } else {
        Ok(index)
    }
}

/// Players that would accept an effect of `rank` played by seat `actor`.
///
/// Empty for untargeted ranks, and for targeted ranks when every opponent
/// is protected or out (the card may still be played, to no effect).
#[must_use]
pub fn valid_targets(state: &GameState, actor: usize, rank: Rank) -> Vec<PlayerId> {
    let rule = rank.target_rule();
    if rule == TargetRule::None {
        return Vec::new();
    }

    state
        .players
        .iter()
        .enumerate()
        .filter(|(index, player)| {
            let is_self = *index == actor;
            player.is_targetable() && (rule == TargetRule::AnyPlayer || !is_self)
        })
        .map(|(_, player)| player.id.clone())
        .collect()
}
