//! Card values.
//!
//! Cards are small `Copy` values. City and infection cards refer to their city
//! by `CityId`; names are resolved through the board only for display.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CityId};

/// The five event cards shuffled into the player deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    OneQuietNight,
    ResilientPopulation,
    Airlift,
    Forecast,
    GovernmentGrant,
}

impl EventKind {
    /// Every event, in deck-building order.
    pub const ALL: [EventKind; 5] = [
        EventKind::OneQuietNight,
        EventKind::ResilientPopulation,
        EventKind::Airlift,
        EventKind::Forecast,
        EventKind::GovernmentGrant,
    ];

    /// Printed card title.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::OneQuietNight => "One Quiet Night",
            EventKind::ResilientPopulation => "Resilient Population",
            EventKind::Airlift => "Airlift",
            EventKind::Forecast => "Forecast",
            EventKind::GovernmentGrant => "Government Grant",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A card from either deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    /// Player deck: one per city.
    City(CityId),
    /// Player deck: resolved on draw, never held.
    Epidemic,
    /// Player deck: playable at any time without an action.
    Event(EventKind),
    /// Infection deck: one per city.
    Infection(CityId),
}

impl Card {
    /// City this card names, if any.
    #[must_use]
    pub fn city(self) -> Option<CityId> {
        match self {
            Card::City(id) | Card::Infection(id) => Some(id),
            Card::Epidemic | Card::Event(_) => None,
        }
    }

    /// Check if this is the city card for `id`.
    #[must_use]
    pub fn is_city_card(self, id: CityId) -> bool {
        self == Card::City(id)
    }

    /// Check if this card can sit in a player's hand.
    #[must_use]
    pub fn is_holdable(self) -> bool {
        matches!(self, Card::City(_) | Card::Event(_))
    }

    /// Human readable label with the city name resolved.
    #[must_use]
    pub fn label(self, board: &Board) -> String {
        match self {
            Card::City(id) => format!("{} card", board.name(id)),
            Card::Infection(id) => format!("{} infection card", board.name(id)),
            Card::Epidemic => "Epidemic".to_string(),
            Card::Event(kind) => kind.name().to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::City(id) => write!(f, "city card #{}", id.0),
            Card::Infection(id) => write!(f, "infection card #{}", id.0),
            Card::Epidemic => f.write_str("Epidemic"),
            Card::Event(kind) => write!(f, "{kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_lookup() {
        assert_eq!(Card::City(CityId::new(3)).city(), Some(CityId::new(3)));
        assert_eq!(Card::Infection(CityId::new(5)).city(), Some(CityId::new(5)));
        assert_eq!(Card::Epidemic.city(), None);
    }

    #[test]
    fn test_holdable() {
        assert!(Card::City(CityId::new(0)).is_holdable());
        assert!(Card::Event(EventKind::Airlift).is_holdable());
        assert!(!Card::Epidemic.is_holdable());
        assert!(!Card::Infection(CityId::new(0)).is_holdable());
    }

    #[test]
    fn test_label() {
        let board = Board::standard().unwrap();
        let atlanta = board.city_id("Atlanta").unwrap();
        assert_eq!(Card::City(atlanta).label(&board), "Atlanta card");
        assert_eq!(Card::Event(EventKind::Forecast).label(&board), "Forecast");
    }
}
