//! Roles and the abilities they switch on.
//!
//! The engine never branches on a role directly. Each player carries a
//! [`RoleAbilities`] record and engine code asks the record which hooks are
//! active.

use serde::{Deserialize, Serialize};

/// The seven roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Scientist,
    Researcher,
    OperationsExpert,
    ContingencyPlanner,
    Dispatcher,
    Medic,
    QuarantineSpecialist,
}

impl Role {
    /// Every role, in the order random assignment draws from.
    pub const ALL: [Role; 7] = [
        Role::Scientist,
        Role::Researcher,
        Role::OperationsExpert,
        Role::ContingencyPlanner,
        Role::Dispatcher,
        Role::Medic,
        Role::QuarantineSpecialist,
    ];

    /// Printed role name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Scientist => "Scientist",
            Role::Researcher => "Researcher",
            Role::OperationsExpert => "Operations Expert",
            Role::ContingencyPlanner => "Contingency Planner",
            Role::Dispatcher => "Dispatcher",
            Role::Medic => "Medic",
            Role::QuarantineSpecialist => "Quarantine Specialist",
        }
    }

    /// The ability record for this role.
    #[must_use]
    pub fn abilities(self) -> RoleAbilities {
        let base = RoleAbilities::default();
        match self {
            Role::Scientist => RoleAbilities {
                cards_to_cure: 4,
                ..base
            },
            Role::Researcher => RoleAbilities {
                shares_any_city_card: true,
                ..base
            },
            Role::OperationsExpert => RoleAbilities {
                builds_with_any_card: true,
                ..base
            },
            Role::ContingencyPlanner => RoleAbilities {
                event_slot: true,
                ..base
            },
            Role::Dispatcher => RoleAbilities {
                controls_other_pawns: true,
                ..base
            },
            Role::Medic => RoleAbilities {
                treats_all_cubes: true,
                clears_cured_on_arrival: true,
                blocks_cured_placement: true,
                ..base
            },
            Role::QuarantineSpecialist => RoleAbilities {
                quarantines_neighborhood: true,
                ..base
            },
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which rule hooks are active for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAbilities {
    /// Same-color city cards needed to discover a cure.
    pub cards_to_cure: usize,
    /// May give any city card when sharing, not only the current city's.
    pub shares_any_city_card: bool,
    /// May build a research station by discarding any card.
    pub builds_with_any_card: bool,
    /// Holds one extra event card taken back from the player discard pile.
    pub event_slot: bool,
    /// Moves other pawns through a link, and may move a pawn to another pawn.
    pub controls_other_pawns: bool,
    /// Treat removes every cube of the color.
    pub treats_all_cubes: bool,
    /// Entering a city removes all cubes of cured colors for free.
    pub clears_cured_on_arrival: bool,
    /// Cured colors cannot be placed in the player's city.
    pub blocks_cured_placement: bool,
    /// The player's city and its neighbors receive no cubes.
    pub quarantines_neighborhood: bool,
}

impl Default for RoleAbilities {
    fn default() -> Self {
        Self {
            cards_to_cure: 5,
            shares_any_city_card: false,
            builds_with_any_card: false,
            event_slot: false,
            controls_other_pawns: false,
            treats_all_cubes: false,
            clears_cured_on_arrival: false,
            blocks_cured_placement: false,
            quarantines_neighborhood: false,
        }
    }
}
