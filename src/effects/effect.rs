//! What a resolved card effect did.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::PlayerId;

/// Why a legal play had no effect.
///
/// A fizzled play still consumes the card and ends the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FizzleReason {
    /// No target was named.
    NoTarget,
    /// The named target is not seated in this match.
    UnknownTarget,
    TargetEliminated,
    /// Handmaid protection absorbed the effect.
    TargetProtected,
    /// A Guard was played without a guess.
    NoGuess,
    /// A hand involved in the effect held no card.
    EmptyHand,
}

/// Result of resolving one discarded card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EffectOutcome {
    /// The card has no effect of its own (Countess).
    NoEffect,
    Fizzled { reason: FizzleReason },
    /// Guard guess against `target`.
    Guessed { target: PlayerId, guess: Rank, correct: bool },
    /// Priest look at `target`'s hand.
    Revealed { target: PlayerId },
    /// Baron comparison; `loser` is `None` on a tie.
    Compared { target: PlayerId, loser: Option<PlayerId> },
    /// Handmaid protection granted to the actor.
    Protected,
    /// Prince forced discard.
    Discarded { target: PlayerId, eliminated: bool, redrew: bool },
    /// King trade.
    Swapped { target: PlayerId },
    /// The actor discarded the Princess.
    SelfEliminated,
}

impl From<FizzleReason> for EffectOutcome {
    fn from(reason: FizzleReason) -> Self {
        EffectOutcome::Fizzled { reason }
    }
}
