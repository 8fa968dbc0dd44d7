//! Card system: ranks, cards, hands and the deck.
//!
//! ## Key Types
//!
//! - `Rank`: Guard (1) to Princess (8); drives behavior and showdown value
//! - `Card`: Unique `CardId` plus a rank
//! - `Hand`: One settled card, plus a transient drawn card during play
//! - `deck`: Build, shuffle, burn and deal the 16-card deck

pub mod deck;
pub mod definition;
pub mod hand;

pub use deck::{build_deck, deal, is_full_deck, restock, shuffle, DECK_SIZE};
pub use definition::{Card, CardId, Rank, TargetRule};
pub use hand::Hand;
