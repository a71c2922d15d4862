//! Map data: city definitions and connection pairs.
//!
//! The standard world map ships inside the binary as JSON (`data/cities.json`,
//! `data/connections.json`). Custom maps use the same two record formats.

use serde::{Deserialize, Serialize};

use super::city::CityDef;
use crate::core::ConfigError;

const STANDARD_CITIES: &str = include_str!("../../data/cities.json");
const STANDARD_CONNECTIONS: &str = include_str!("../../data/connections.json");

/// An undirected edge between two named cities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDef {
    pub city1: String,
    pub city2: String,
}

impl ConnectionDef {
    /// Create a connection between two city names.
    #[must_use]
    pub fn new(city1: impl Into<String>, city2: impl Into<String>) -> Self {
        Self {
            city1: city1.into(),
            city2: city2.into(),
        }
    }
}

/// A complete map: cities in order plus their connections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    pub cities: Vec<CityDef>,
    pub connections: Vec<ConnectionDef>,
}

impl MapData {
    /// The 48-city world map.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::from_json(STANDARD_CITIES, STANDARD_CONNECTIONS)
    }

    /// Parse a map from a city list and a connection list.
    pub fn from_json(cities: &str, connections: &str) -> Result<Self, ConfigError> {
        let cities = serde_json::from_str(cities).map_err(|e| ConfigError::Json(e.to_string()))?;
        let connections = serde_json::from_str(connections).map_err(|e| ConfigError::Json(e.to_string()))?;
        Ok(Self { cities, connections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disease::Color;

    #[test]
    fn test_standard_map_parses() {
        let map = MapData::standard().unwrap();
        assert_eq!(map.cities.len(), 48);
        assert_eq!(map.cities[0].name, "Atlanta");
        for color in Color::ALL {
            assert_eq!(map.cities.iter().filter(|c| c.color == color).count(), 12);
        }
    }

    #[test]
    fn test_connection_records() {
        let map = MapData::standard().unwrap();
        assert!(map.connections.contains(&ConnectionDef::new("Madrid", "Sao Paulo")));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(MapData::from_json("[", "[]"), Err(ConfigError::Json(_))));
    }
}
