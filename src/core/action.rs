//! Commands and their history.
//!
//! Every mutating engine method has an `Action` counterpart so that commands
//! can be enumerated (`RulesEngine::legal_actions`), dispatched generically
//! (`RulesEngine::apply_action`) and recorded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::board::CityId;
use crate::cards::{Card, EventKind};
use crate::disease::Color;

/// How a pawn travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Drive to a neighbor, shuttle between research stations, or (Dispatcher)
    /// jump to a city holding another pawn. No card.
    Basic,
    /// Discard the destination's city card.
    Direct,
    /// Discard the current city's card to go anywhere.
    Charter,
}

/// Direction of a card exchange, seen from the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareDirection {
    /// Current player hands the card over.
    Give,
    /// Current player receives the card.
    Take,
}

/// An event card's effect together with its targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventPlay {
    /// Skip the next infect phase.
    OneQuietNight,
    /// Remove a card from the infection discard pile from the game.
    ResilientPopulation { city: CityId },
    /// Move any pawn to any city.
    Airlift { player: PlayerId, city: CityId },
    /// Reorder the top infection cards; `order[0]` ends up on top.
    Forecast { order: SmallVec<[CityId; 6]> },
    /// Build a research station anywhere without a card.
    GovernmentGrant {
        city: CityId,
        relocate_from: Option<CityId>,
    },
}

impl EventPlay {
    /// The event card this play consumes.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            EventPlay::OneQuietNight => EventKind::OneQuietNight,
            EventPlay::ResilientPopulation { .. } => EventKind::ResilientPopulation,
            EventPlay::Airlift { .. } => EventKind::Airlift,
            EventPlay::Forecast { .. } => EventKind::Forecast,
            EventPlay::GovernmentGrant { .. } => EventKind::GovernmentGrant,
        }
    }
}

/// A complete engine command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move { target: CityId, kind: MoveKind },
    BuildResearchStation { discard: Card, relocate_from: Option<CityId> },
    Treat { color: Color },
    Cure { color: Color },
    Share { card: Card, other: PlayerId, direction: ShareDirection },
    Skip,
    /// Dispatcher: pick the pawn subsequent moves apply to (`None` = own pawn).
    Link { target: Option<PlayerId> },
    /// Contingency Planner: store an event from the player discard pile.
    TakeEvent { event: EventKind },
    PlayEvent { holder: PlayerId, play: EventPlay },
    /// Resolve a pending hand-limit discard.
    Discard { player: PlayerId, card: Card },
    EndTurn,
}

impl Action {
    /// Check if this action spends one of the turn's actions.
    #[must_use]
    pub fn consumes_action(&self) -> bool {
        matches!(
            self,
            Action::Move { .. }
                | Action::BuildResearchStation { .. }
                | Action::Treat { .. }
                | Action::Cure { .. }
                | Action::Share { .. }
                | Action::TakeEvent { .. }
        )
    }
}

/// A recorded, accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that issued the command.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumes_action() {
        assert!(Action::Treat { color: Color::Blue }.consumes_action());
        assert!(Action::Move { target: CityId::new(1), kind: MoveKind::Basic }.consumes_action());
        assert!(!Action::Skip.consumes_action());
        assert!(!Action::EndTurn.consumes_action());
        assert!(!Action::PlayEvent {
            holder: PlayerId::new(0),
            play: EventPlay::OneQuietNight
        }
        .consumes_action());
    }

    #[test]
    fn test_event_play_kind() {
        let play = EventPlay::Airlift { player: PlayerId::new(1), city: CityId::new(3) };
        assert_eq!(play.kind(), EventKind::Airlift);
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            Action::Share {
                card: Card::City(CityId::new(4)),
                other: PlayerId::new(0),
                direction: ShareDirection::Give,
            },
            3,
            2,
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
