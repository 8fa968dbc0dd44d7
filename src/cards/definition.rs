//! Card definitions - static card data.
//!
//! A `Card` is an immutable value: a unique `CardId` plus its `Rank`.
//! Everything else (name, rules text, targeting) is derived from the rank,
//! so two Guards differ only by id.

use serde::{Deserialize, Serialize};

use crate::core::RuleError;

/// Unique identifier for a physical card in the deck (e.g. `"guard-3"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Who a card's effect may name as its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetRule {
    /// No target.
    None,
    /// Another player. Naming yourself is an illegal action.
    Opponent,
    /// Any player, including yourself.
    AnyPlayer,
}

/// Card rank 1-8. Determines both behavior and showdown value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Rank {
    Guard = 1,
    Priest = 2,
    Baron = 3,
    Handmaid = 4,
    Prince = 5,
    King = 6,
    Countess = 7,
    Princess = 8,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 8] = [
        Rank::Guard,
        Rank::Priest,
        Rank::Baron,
        Rank::Handmaid,
        Rank::Prince,
        Rank::King,
        Rank::Countess,
        Rank::Princess,
    ];

    /// Numeric value (1-8).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Number of copies in the 16-card deck.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            Rank::Guard => 5,
            Rank::Priest | Rank::Baron | Rank::Handmaid | Rank::Prince => 2,
            Rank::King | Rank::Countess | Rank::Princess => 1,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Guard => "Guard",
            Rank::Priest => "Priest",
            Rank::Baron => "Baron",
            Rank::Handmaid => "Handmaid",
            Rank::Prince => "Prince",
            Rank::King => "King",
            Rank::Countess => "Countess",
            Rank::Princess => "Princess",
        }
    }

    /// Rules text shown on the card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Rank::Guard => "Name a player and guess their card (not Guard).",
            Rank::Priest => "Look at another player's hand.",
            Rank::Baron => "Compare hands with another player.",
            Rank::Handmaid => "You are protected until your next turn.",
            Rank::Prince => "Choose any player (including yourself) to discard their hand and draw a new card.",
            Rank::King => "Trade hands with another player.",
            Rank::Countess => "If you hold the King or a Prince, you must discard the Countess.",
            Rank::Princess => "If you discard this card, you are out of the round.",
        }
    }

    /// Short summary of the effect.
    #[must_use]
    pub const fn effect(self) -> &'static str {
        match self {
            Rank::Guard => "A correct guess eliminates the target.",
            Rank::Priest => "Private information.",
            Rank::Baron => "The lower card is eliminated.",
            Rank::Handmaid => "Temporary immunity.",
            Rank::Prince => "Forced discard and redraw.",
            Rank::King => "Hands are exchanged.",
            Rank::Countess => "Mandatory discard under condition.",
            Rank::Princess => "Self-elimination when discarded.",
        }
    }

    /// Targeting rule for this rank's effect.
    #[must_use]
    pub const fn target_rule(self) -> TargetRule {
        match self {
            Rank::Guard | Rank::Priest | Rank::Baron | Rank::King => TargetRule::Opponent,
            Rank::Prince => TargetRule::AnyPlayer,
            Rank::Handmaid | Rank::Countess | Rank::Princess => TargetRule::None,
        }
    }

    /// Lower-case id prefix used for canonical card ids.
    #[must_use]
    pub(crate) const fn slug(self) -> &'static str {
        match self {
            Rank::Guard => "guard",
            Rank::Priest => "priest",
            Rank::Baron => "baron",
            Rank::Handmaid => "handmaid",
            Rank::Prince => "prince",
            Rank::King => "king",
            Rank::Countess => "countess",
            Rank::Princess => "princess",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL
            .get(usize::from(value).wrapping_sub(1))
            .copied()
            .ok_or(RuleError::InvalidRank { value })
    }
}

/// A physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the deck.
    pub id: CardId,
    /// Rank, which drives behavior.
    pub rank: Rank,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: impl Into<CardId>, rank: Rank) -> Self {
        Self { id: id.into(), rank }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.rank.name()
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.rank.description()
    }

    #[must_use]
    pub fn effect(&self) -> &'static str {
        self.rank.effect()
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values_and_order() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.value() as usize, i + 1);
        }
        assert!(Rank::Guard < Rank::Princess);
    }

    #[test]
    fn test_rank_try_from() {
        assert_eq!(Rank::try_from(1).unwrap(), Rank::Guard);
        assert_eq!(Rank::try_from(8).unwrap(), Rank::Princess);
        assert_eq!(Rank::try_from(0), Err(RuleError::InvalidRank { value: 0 }));
        assert_eq!(Rank::try_from(9), Err(RuleError::InvalidRank { value: 9 }));
    }

    #[test]
    fn test_copies_sum_to_sixteen() {
        let total: usize = Rank::ALL.iter().map(|r| r.copies()).sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn test_target_rules() {
        assert_eq!(Rank::Guard.target_rule(), TargetRule::Opponent);
        assert_eq!(Rank::Prince.target_rule(), TargetRule::AnyPlayer);
        assert_eq!(Rank::Handmaid.target_rule(), TargetRule::None);
        assert_eq!(Rank::Princess.target_rule(), TargetRule::None);
    }

    #[test]
    fn test_card_serializes_rank_as_number() {
        let card = Card::new("baron-1", Rank::Baron);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"id":"baron-1","rank":3}"#);

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>(r#"{"id":"x","rank":9}"#).is_err());
    }
}
