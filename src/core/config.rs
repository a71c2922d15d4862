//! Game configuration.
//!
//! A `GameConfig` fixes every tunable rule constant before setup: seat count,
//! difficulty, action budget, hand limit, cube supply, research-station pool,
//! outbreak ceiling and the infection-rate escalation table.
//!
//! The defaults are the standard rules. Configs can be built with the
//! `with_*` methods or loaded from JSON; both paths end in `validate()`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::players::Role;

/// Difficulty selects how many epidemic cards are seeded into the player deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// 4 epidemics.
    #[default]
    Easy,
    /// 5 epidemics.
    Normal,
    /// 6 epidemics.
    Covid19,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Covid19];

    /// Number of epidemic cards shuffled into the player deck.
    #[must_use]
    pub const fn epidemic_count(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Normal => 5,
            Difficulty::Covid19 => 6,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Covid19 => "COVID19",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "NORMAL" => Ok(Difficulty::Normal),
            "COVID19" => Ok(Difficulty::Covid19),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Complete rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Epidemic density.
    pub difficulty: Difficulty,

    /// Explicit roles per seat. Seats past the end are dealt random roles.
    pub roles: Vec<Role>,

    /// Actions each player gets per turn.
    pub actions_per_turn: u8,

    /// Maximum hand size outside of a pending discard.
    pub hand_limit: usize,

    /// Cube supply per disease color.
    pub cubes_per_color: i32,

    /// Research stations still in the box at setup.
    pub research_stations: u32,

    /// The game is lost once the outbreak counter exceeds this.
    pub max_outbreaks: u32,

    /// Infection cards drawn per infect phase, indexed by escalation level.
    /// Levels past the end use the last entry.
    pub infection_rates: Vec<usize>,

    /// Player cards drawn at the end of every turn.
    pub cards_to_draw: usize,

    /// City every pawn starts in, which also holds the first research station.
    pub starting_city: String,

    /// Cubes placed per initial infection row; each row infects three cities.
    pub initial_infections: Vec<u8>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            difficulty: Difficulty::Easy,
            roles: Vec::new(),
            actions_per_turn: 4,
            hand_limit: 7,
            cubes_per_color: 24,
            research_stations: 7,
            max_outbreaks: 7,
            infection_rates: vec![2, 2, 2, 3, 3, 4, 4],
            cards_to_draw: 2,
            starting_city: "Atlanta".to_string(),
            initial_infections: vec![3, 2, 1],
        }
    }
}

impl GameConfig {
    /// Cities infected per initial infection row.
    pub const CITIES_PER_INFECTION_ROW: usize = 3;

    /// Create a standard configuration for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the roles of the first seats.
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Set the outbreak ceiling.
    #[must_use]
    pub fn with_max_outbreaks(mut self, max: u32) -> Self {
        self.max_outbreaks = max;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the research-station pool.
    #[must_use]
    pub fn with_research_stations(mut self, stations: u32) -> Self {
        self.research_stations = stations;
        self
    }

    /// Set the per-color cube supply.
    #[must_use]
    pub fn with_cubes_per_color(mut self, cubes: i32) -> Self {
        self.cubes_per_color = cubes;
        self
    }

    /// Replace the infection-rate table.
    #[must_use]
    pub fn with_infection_rates(mut self, rates: Vec<usize>) -> Self {
        self.infection_rates = rates;
        self
    }

    /// Replace the initial infection rows.
    #[must_use]
    pub fn with_initial_infections(mut self, rows: Vec<u8>) -> Self {
        self.initial_infections = rows;
        self
    }

    /// Cards dealt to each seat at setup.
    #[must_use]
    pub fn starting_hand_size(&self) -> usize {
        match self.player_count {
            2 => 4,
            3 => 3,
            _ => 2,
        }
    }

    /// Infection cards drawn at escalation level `index`.
    #[must_use]
    pub fn infection_rate(&self, index: usize) -> usize {
        self.infection_rates
            .get(index)
            .or_else(|| self.infection_rates.last())
            .copied()
            .unwrap_or(0)
    }

    /// Check every invariant setup relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=4).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.roles.len() > self.player_count {
            return Err(ConfigError::TooManyRoles {
                roles: self.roles.len(),
                players: self.player_count,
            });
        }
        for (i, role) in self.roles.iter().enumerate() {
            if self.roles[..i].contains(role) {
                return Err(ConfigError::DuplicateRole(*role));
            }
        }
        if self.infection_rates.is_empty() {
            return Err(ConfigError::EmptyInfectionRates);
        }
        if self.actions_per_turn == 0 {
            return Err(ConfigError::NoActions);
        }
        if self.initial_infections.iter().any(|&n| n == 0 || n > 3) {
            return Err(ConfigError::InitialInfection);
        }
        Ok(())
    }
}
