//! # pandemic-engine
//!
//! Rule engine for a cooperative epidemic-control board game on a world map
//! of 48 cities. Two to four players move between cities, treat disease
//! cubes, share city cards and race to cure four diseases before outbreaks,
//! cube shortages or an empty player deck end the game.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every shuffle and random pick goes through an
//!    injected [`RandomSource`]. A seed replays a game exactly.
//!
//! 2. **Validate, then mutate**: Every command is checked in full before any
//!    state changes. A rejected command leaves the game untouched and puts a
//!    line in the [`GameLog`].
//!
//! 3. **One source of legality**: [`RulesEngine::legal_actions`] filters
//!    candidates through the same check that guards execution.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, actions, errors, game log
//! - `disease`: Colors and the per-color cube supply and cure state
//! - `board`: Cities, the adjacency graph and map data
//! - `cards`: Player, epidemic, event and infection cards and their decks
//! - `players`: Roles and pawns
//! - `rules`: `RulesEngine` trait and game results
//! - `game`: The `Game` aggregate: setup, actions, infection, turns
//! - `sim`: Seeded random self-play
//!
//! ```
//! use pandemic_engine::{Game, GameConfig, GameLog, RulesEngine};
//!
//! let mut log = GameLog::new();
//! let game = Game::seeded(GameConfig::new(2), 7, &mut log).unwrap();
//! assert_eq!(game.players().player_count(), 2);
//! assert!(!game.legal_actions().is_empty());
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod disease;
pub mod game;
pub mod players;
pub mod rules;
pub mod sim;

pub use crate::core::{
    Action, ActionError, ActionRecord, ConfigError, Difficulty, EventPlay, GameConfig, GameLog, GameRng,
    MoveKind, PlayerId, PlayerMap, RandomSource, ScriptedRng, ShareDirection,
};

pub use crate::board::{Board, City, CityId, MapData};

pub use crate::cards::{Card, Deck, EventKind, GameDecks};

pub use crate::disease::{Color, DiseaseRegistry, DiseaseStatus};

pub use crate::players::{Player, Role, RoleAbilities};

pub use crate::rules::{GameResult, LossReason, RulesEngine};

pub use crate::game::{Game, InfectionOutcome, ResumePoint, TurnPhase};

pub use crate::sim::{SelfPlayConfig, SelfPlayReport, SelfPlayRunner};
