//! The board: cities, their connections and per-city state.
//!
//! ## Key Types
//!
//! - `CityId`: Dense index of a city in map order
//! - `City`: Cube counts, research station and protection flags
//! - `Board`: The undirected city graph
//! - `MapData`: City and connection records the board is built from

pub mod city;
pub mod data;
pub mod graph;

pub use city::{City, CityDef, CityId};
pub use data::{ConnectionDef, MapData};
pub use graph::{Board, Neighbors};
