//! Cards and decks.
//!
//! ## Piles
//!
//! A game has five piles, all held by `GameDecks`:
//!
//! - **player deck**: city cards, event cards and seeded epidemics
//! - **player discard**: spent city, event and epidemic cards
//! - **infection deck**: one card per city
//! - **infection discard**: cities infected since the last epidemic
//! - **removed**: cards taken out of the game by events
//!
//! No card is ever created or destroyed after setup: every card is in exactly
//! one pile or one player's hand.

pub mod card;
pub mod deck;
pub mod infection_deck;
pub mod player_deck;

pub use card::{Card, EventKind};
pub use deck::Deck;
pub use infection_deck::{infection_cards, intensify};
pub use player_deck::{city_cards, epidemic_positions, event_cards, interval_width, seed_epidemics};

use serde::{Deserialize, Serialize};

/// Every pile in play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDecks {
    pub player_deck: Deck,
    pub player_discard: Deck,
    pub infection_deck: Deck,
    pub infection_discard: Deck,
    pub removed: Deck,
}

impl GameDecks {
    /// Create empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.player_deck.len()
            + self.player_discard.len()
            + self.infection_deck.len()
            + self.infection_discard.len()
            + self.removed.len()
    }
}
