//! Effect resolution - applying a discarded card to the game state.
//!
//! The resolver runs after the card has left the actor's hand and landed on
//! their discard pile, so "the actor's card" always means the one card they
//! kept. Choices have already been validated by `targeting::validate_choice`.

use crate::cards::{Card, Hand, Rank};
use crate::core::{CardPlay, GameState, Reveal};

use super::targeting::locate_target;
use super::{EffectOutcome, FizzleReason};

/// Resolves card effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply the effect of `card`, just discarded by seat `actor`.
    pub fn resolve(state: &mut GameState, actor: usize, card: &Card, play: &CardPlay) -> EffectOutcome {
        match card.rank {
            Rank::Guard => Self::guard(state, actor, play),
            Rank::Priest => Self::priest(state, actor, play),
            Rank::Baron => Self::baron(state, actor, play),
            Rank::Handmaid => Self::handmaid(state, actor),
            Rank::Prince => Self::prince(state, play),
            Rank::King => Self::king(state, actor, play),
            Rank::Countess => EffectOutcome::NoEffect,
            Rank::Princess => {
                Self::eliminate(state, actor);
                EffectOutcome::SelfEliminated
            }
        }
    }

    fn guard(state: &mut GameState, actor: usize, play: &CardPlay) -> EffectOutcome {
        let target = match Self::target(state, play) {
            Ok(target) => target,
            Err(outcome) => return outcome,
        };
        let Some(guess) = play.guess else {
            state.log("No guess was named.");
            return FizzleReason::NoGuess.into();
        };

        state.log(format!(
            "{} guesses that {} holds the {}.",
            state.players[actor].name,
            state.players[target].name,
            guess.name()
        ));

        let correct = state.players[target]
            .hand
            .settled()
            .is_some_and(|held| held.rank == guess);
        if correct {
            Self::eliminate(state, target);
        } else {
            state.log("The guess is wrong.");
        }

        EffectOutcome::Guessed {
            target: state.players[target].id.clone(),
            guess,
            correct,
        }
    }

    fn priest(state: &mut GameState, actor: usize, play: &CardPlay) -> EffectOutcome {
        let target = match Self::target(state, play) {
            Ok(target) => target,
            Err(outcome) => return outcome,
        };
        let Some(card) = state.players[target].hand.settled().cloned() else {
            return FizzleReason::EmptyHand.into();
        };

        let viewer = state.players[actor].id.clone();
        let subject = state.players[target].id.clone();
        state.log(format!(
            "{} looks at {}'s hand.",
            state.players[actor].name, state.players[target].name
        ));
        state.reveals.push_back(Reveal {
            viewer,
            subject: subject.clone(),
            card,
        });

        EffectOutcome::Revealed { target: subject }
    }

    fn baron(state: &mut GameState, actor: usize, play: &CardPlay) -> EffectOutcome {
        let target = match Self::target(state, play) {
            Ok(target) => target,
            Err(outcome) => return outcome,
        };
        let ours = state.players[actor].hand.settled().map(|c| c.rank);
        let theirs = state.players[target].hand.settled().map(|c| c.rank);
        let (Some(ours), Some(theirs)) = (ours, theirs) else {
            return FizzleReason::EmptyHand.into();
        };

        state.log(format!(
            "{} compares hands with {}.",
            state.players[actor].name, state.players[target].name
        ));

        let loser = match ours.cmp(&theirs) {
            std::cmp::Ordering::Less => Some(actor),
            std::cmp::Ordering::Greater => Some(target),
            std::cmp::Ordering::Equal => None,
        };
        match loser {
            Some(loser) => Self::eliminate(state, loser),
            None => state.log("It is a tie. Nobody is eliminated."),
        }

        EffectOutcome::Compared {
            target: state.players[target].id.clone(),
            loser: loser.map(|i| state.players[i].id.clone()),
        }
    }

    fn handmaid(state: &mut GameState, actor: usize) -> EffectOutcome {
        let player = state.player_mut(actor);
        player.is_protected = true;
        let line = format!("{} is protected until their next turn.", player.name);
        state.log(line);
        EffectOutcome::Protected
    }

    fn prince(state: &mut GameState, play: &CardPlay) -> EffectOutcome {
        let target = match Self::target(state, play) {
            Ok(target) => target,
            Err(outcome) => return outcome,
        };

        let discarded = state.player_mut(target).hand.take_all();
        if discarded.is_empty() {
            return FizzleReason::EmptyHand.into();
        }

        let lost_princess = discarded.iter().any(|c| c.rank == Rank::Princess);
        for card in discarded {
            let line = format!("{} discards the {}.", state.players[target].name, card.name());
            state.player_mut(target).discard_pile.push(card);
            state.log(line);
        }

        let mut redrew = false;
        if lost_princess {
            Self::eliminate(state, target);
        } else if let Some(card) = state.deck.pop_back() {
            state.player_mut(target).hand.push(card);
            state.log(format!("{} draws a new card.", state.players[target].name));
            redrew = true;
        } else {
            state.log(format!(
                "The deck is empty; {} has no card.",
                state.players[target].name
            ));
        }

        EffectOutcome::Discarded {
            target: state.players[target].id.clone(),
            eliminated: lost_princess,
            redrew,
        }
    }

    fn king(state: &mut GameState, actor: usize, play: &CardPlay) -> EffectOutcome {
        let target = match Self::target(state, play) {
            Ok(target) => target,
            Err(outcome) => return outcome,
        };

        let ours = std::mem::take(&mut state.player_mut(actor).hand);
        let theirs = std::mem::replace(&mut state.player_mut(target).hand, ours);
        state.player_mut(actor).hand = theirs;

        state.log(format!(
            "{} trades hands with {}.",
            state.players[actor].name, state.players[target].name
        ));

        EffectOutcome::Swapped {
            target: state.players[target].id.clone(),
        }
    }

    /// Find the target seat, logging the fizzle if there is none.
    fn target(state: &mut GameState, play: &CardPlay) -> Result<usize, EffectOutcome> {
        locate_target(state, play.target.as_ref()).map_err(|reason| {
            let line = match reason {
                FizzleReason::TargetProtected => "The target is protected. The card has no effect.",
                FizzleReason::TargetEliminated => "The target is already out. The card has no effect.",
                _ => "No valid target. The card has no effect.",
            };
            state.log(line);
            EffectOutcome::from(reason)
        })
    }

    fn eliminate(state: &mut GameState, index: usize) {
        let player = state.player_mut(index);
        player.is_eliminated = true;
        let line = format!("{} is out of the round!", player.name);
        state.log(line);
    }
}

/// Whether `hand` forces the Countess to be discarded instead of `card`.
#[must_use]
pub fn countess_forced(hand: &Hand, card: &Card) -> bool {
    matches!(card.rank, Rank::King | Rank::Prince) && hand.has_rank(Rank::Countess)
}
