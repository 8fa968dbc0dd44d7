//! Deck manager: build, shuffle, burn and deal.

use im::Vector;

use super::{Card, Rank};
use crate::core::{GameRng, GameState};

/// Cards in a Love Letter deck.
pub const DECK_SIZE: usize = 16;

/// The canonical deck in reference order: all Guards, then Priests, and so
/// on up to the Princess. Ids are `<rank>-<n>`, numbered from 1.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    Rank::ALL
        .iter()
        .flat_map(|&rank| {
            (1..=rank.copies()).map(move |n| Card::new(format!("{}-{n}", rank.slug()), rank))
        })
        .collect()
}

/// A uniformly shuffled copy of `deck`. The input is left untouched.
#[must_use]
pub fn shuffle(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

/// Whether `deck` is some ordering of the canonical deck.
#[must_use]
pub fn is_full_deck(deck: &[Card]) -> bool {
    let mut expected = build_deck();
    let mut given = deck.to_vec();
    expected.sort_by(|a, b| a.id.cmp(&b.id));
    given.sort_by(|a, b| a.id.cmp(&b.id));
    expected == given
}

/// Set up a round from the state's deck: optionally burn the top card,
/// then give each seat one card in seating order.
///
/// Does nothing if the deck cannot cover the burn plus one card per seat.
pub fn deal(state: &mut GameState, burn: bool) {
    let needed = usize::from(burn) + state.player_count();
    if state.deck.len() < needed {
        tracing::warn!(
            deck = state.deck.len(),
            needed,
            "deck too small to deal, skipping"
        );
        return;
    }

    state.burned_card = if burn { state.deck.pop_back() } else { None };

    for index in 0..state.player_count() {
        if let Some(card) = state.deck.pop_back() {
            state.player_mut(index).hand.push(card);
        }
    }
}

/// Replace the state's deck with a freshly shuffled canonical deck.
pub fn restock(state: &mut GameState) {
    let deck = shuffle(&build_deck(), &mut state.rng);
    state.deck = Vector::from(deck);
}
