//! A player's hand.
//!
//! Between turns a hand holds exactly one settled card. During the play
//! phase it briefly holds a second, freshly drawn card. Effects never index
//! into the hand; they run after the played card is gone and ask for "the
//! settled card".

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Card, CardId, Rank};

/// Hand of at most two cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: SmallVec<[Card; 2]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand from the given cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over held cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Add a card (deal or draw).
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Look up a held card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.rank == rank)
    }

    /// The single card held between turns. `None` unless exactly one card
    /// is held.
    #[must_use]
    pub fn settled(&self) -> Option<&Card> {
        match self.cards.as_slice() {
            [card] => Some(card),
            _ => None,
        }
    }

    /// Remove and return the card with the given id.
    pub fn take(&mut self, id: &CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| &c.id == id)?;
        Some(self.cards.remove(pos))
    }

    /// Remove every held card, in draw order.
    pub fn take_all(&mut self) -> SmallVec<[Card; 2]> {
        std::mem::take(&mut self.cards)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
