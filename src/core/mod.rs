//! Core engine types: seats, RNG, configuration, actions, errors, log.
//!
//! Everything here is independent of the board layout and card contents.

pub mod action;
pub mod config;
pub mod error;
pub mod game_log;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, EventPlay, MoveKind, ShareDirection};
pub use config::{Difficulty, GameConfig};
pub use error::{ActionError, ConfigError};
pub use game_log::GameLog;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
