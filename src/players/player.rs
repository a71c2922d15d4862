//! Per-seat player state.

use serde::{Deserialize, Serialize};

use super::role::{Role, RoleAbilities};
use crate::board::CityId;
use crate::cards::{Card, EventKind};
use crate::core::PlayerId;

/// A pawn, its hand and its action budget.
///
/// Hands only ever contain city and event cards. The Contingency Planner's
/// stored event lives in `additional_card` and does not count toward the hand
/// limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub role: Role,
    pub abilities: RoleAbilities,
    pub location: CityId,
    pub hand: Vec<Card>,
    pub moves_remaining: u8,
    /// Dispatcher: pawn that moves issued by this player apply to.
    pub link: Option<PlayerId>,
    /// Contingency Planner: stored event card.
    pub additional_card: Option<EventKind>,
}

impl Player {
    /// Create a player standing in `location` with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, role: Role, location: CityId, moves: u8) -> Self {
        Self {
            id,
            role,
            abilities: role.abilities(),
            location,
            hand: Vec::new(),
            moves_remaining: moves,
            link: None,
            additional_card: None,
        }
    }

    /// Check if `card` is in the hand.
    #[must_use]
    pub fn has(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Check if the player can play `event`, from the hand or the extra slot.
    #[must_use]
    pub fn holds_event(&self, event: EventKind) -> bool {
        self.has(Card::Event(event)) || self.additional_card == Some(event)
    }

    /// Remove one copy of `card`. Returns whether it was held.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(pos) => {
                self.hand.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Add cards to the hand.
    pub fn draw(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Number of cards held (the extra event slot excluded).
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Cards held beyond `limit`.
    #[must_use]
    pub fn excess_cards(&self, limit: usize) -> usize {
        self.hand.len().saturating_sub(limit)
    }

    /// City cards held, in hand order.
    pub fn city_cards(&self) -> impl Iterator<Item = CityId> + '_ {
        self.hand.iter().filter_map(|&c| match c {
            Card::City(id) => Some(id),
            _ => None,
        })
    }

    /// Refill the action budget.
    pub fn replenish_moves(&mut self, moves: u8) {
        self.moves_remaining = moves;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medic() -> Player {
        Player::new(PlayerId::new(0), Role::Medic, CityId::new(0), 4)
    }

    #[test]
    fn test_new_player() {
        let p = medic();
        assert_eq!(p.moves_remaining, 4);
        assert!(p.abilities.treats_all_cubes);
        assert_eq!(p.hand_size(), 0);
        assert_eq!(p.to_string(), "Player 1 (Medic)");
    }

    #[test]
    fn test_hand_operations() {
        let mut p = medic();
        p.draw([Card::City(CityId::new(3)), Card::Event(EventKind::Airlift)]);
        assert!(p.has(Card::City(CityId::new(3))));
        assert!(p.holds_event(EventKind::Airlift));
        assert!(p.remove_card(Card::City(CityId::new(3))));
        assert!(!p.remove_card(Card::City(CityId::new(3))));
        assert_eq!(p.hand_size(), 1);
    }

    #[test]
    fn test_excess_cards() {
        let mut p = medic();
        p.draw((0..9).map(|i| Card::City(CityId::new(i))));
        assert_eq!(p.excess_cards(7), 2);
        assert_eq!(p.city_cards().count(), 9);
    }

    #[test]
    fn test_event_slot() {
        let mut p = Player::new(PlayerId::new(1), Role::ContingencyPlanner, CityId::new(0), 4);
        p.additional_card = Some(EventKind::Forecast);
        assert!(p.holds_event(EventKind::Forecast));
        assert_eq!(p.hand_size(), 0);
    }
}
