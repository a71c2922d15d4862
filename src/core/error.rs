//! Error types.
//!
//! Two families with very different weight:
//!
//! - [`ActionError`]: a command was refused. This is normal gameplay (a
//!   misclick, a move to a city that is not adjacent) and never leaves partial
//!   state behind. Callers re-prompt.
//! - [`ConfigError`]: configuration or map data is unusable. Setup fails.

use thiserror::Error;

use crate::board::CityId;
use crate::cards::Card;
use crate::core::PlayerId;
use crate::disease::Color;
use crate::players::Role;

/// Reasons a command is rejected. State is unchanged whenever one is returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,
    #[error("{player} must discard down to the hand limit first")]
    DiscardPending { player: PlayerId },
    #[error("no discard is pending for {player}")]
    NoDiscardPending { player: PlayerId },
    #[error("no actions left this turn")]
    NoActionsLeft,
    #[error("unknown city {0:?}")]
    UnknownCity(CityId),
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("{from} is not connected to {to}")]
    NotAdjacent { from: String, to: String },
    #[error("already in {0}")]
    SameCity(String),
    #[error("{card} is not held")]
    MissingCard { card: Card },
    #[error("no {color} cubes in {city}")]
    NoCubes { color: Color, city: String },
    #[error("{0} is already cured")]
    AlreadyCured(Color),
    #[error("curing {color} needs {needed} cards, {held} held")]
    NotEnoughCards { color: Color, needed: usize, held: usize },
    #[error("{0} has no research station")]
    NoResearchStation(String),
    #[error("no research stations left; one must be relocated")]
    StationPoolEmpty,
    #[error("{0} already has a research station")]
    StationAlreadyPresent(String),
    #[error("{other} is not in {city}")]
    NotCoLocated { other: PlayerId, city: String },
    #[error("{role} cannot do that")]
    RoleCannot { role: Role },
    #[error("{0}")]
    NotApplicable(String),
    #[error("forecast order must be a permutation of the top {0} infection cards")]
    InvalidForecast(usize),
}

/// Fatal setup problems.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("only 2-4 players supported, {0} requested")]
    PlayerCount(usize),
    #[error("{roles} roles given for {players} players")]
    TooManyRoles { roles: usize, players: usize },
    #[error("role {0} assigned twice")]
    DuplicateRole(Role),
    #[error("infection rate table is empty")]
    EmptyInfectionRates,
    #[error("actions per turn must be positive")]
    NoActions,
    #[error("initial infection rows must place 1-3 cubes")]
    InitialInfection,
    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),
    #[error("unknown city {0:?} in map data")]
    UnknownCity(String),
    #[error("city {0:?} defined twice")]
    DuplicateCity(String),
    #[error("map has {0} cities, at most 255 supported")]
    TooManyCities(usize),
    #[error("map data needs {needed} cards for setup, only {available} available")]
    NotEnoughCards { needed: usize, available: usize },
    #[error("invalid JSON: {0}")]
    Json(String),
}
