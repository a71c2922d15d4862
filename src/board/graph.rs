//! The city graph.
//!
//! `Board` owns every `City` in map order together with an undirected
//! adjacency list. The topology is fixed once built; only per-city state
//! (cubes, stations, protection) changes during a game, and only through the
//! engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::city::{City, CityId};
use super::data::MapData;
use crate::core::ConfigError;
use crate::disease::Color;

/// Neighbor list. The standard map never exceeds six connections per city.
pub type Neighbors = SmallVec<[CityId; 6]>;

/// Cities plus connections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cities: Vec<City>,
    adjacency: Vec<Neighbors>,
    by_name: FxHashMap<String, CityId>,
}

impl Board {
    /// Distance (in map units) within which a point selects a city.
    pub const SELECT_RADIUS: i32 = 10;

    /// Build a board from map data.
    ///
    /// Fails on duplicate city names, connections naming unknown cities, or
    /// more cities than a `CityId` can address.
    pub fn from_map(map: &MapData) -> Result<Self, ConfigError> {
        if map.cities.len() > usize::from(u8::MAX) {
            return Err(ConfigError::TooManyCities(map.cities.len()));
        }

        let mut cities = Vec::with_capacity(map.cities.len());
        let mut by_name = FxHashMap::default();
        for (index, def) in map.cities.iter().enumerate() {
            let id = CityId::new(index as u8);
            if by_name.insert(def.name.clone(), id).is_some() {
                return Err(ConfigError::DuplicateCity(def.name.clone()));
            }
            cities.push(City::from_def(id, def));
        }

        let mut adjacency = vec![Neighbors::new(); cities.len()];
        for conn in &map.connections {
            let a = *by_name
                .get(&conn.city1)
                .ok_or_else(|| ConfigError::UnknownCity(conn.city1.clone()))?;
            let b = *by_name
                .get(&conn.city2)
                .ok_or_else(|| ConfigError::UnknownCity(conn.city2.clone()))?;
            if a == b || adjacency[a.index()].contains(&b) {
                continue;
            }
            adjacency[a.index()].push(b);
            adjacency[b.index()].push(a);
        }

        log::debug!(
            "board built: {} cities, {} connections",
            cities.len(),
            adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
        );

        Ok(Self {
            cities,
            adjacency,
            by_name,
        })
    }

    /// The standard 48-city world map.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::from_map(&MapData::standard()?)
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Check if the board has no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// All cities in map order.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// All city ids in map order.
    pub fn ids(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.iter().map(|c| c.id)
    }

    /// Look up a city.
    #[must_use]
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.index())
    }

    pub(crate) fn city_mut(&mut self, id: CityId) -> Option<&mut City> {
        self.cities.get_mut(id.index())
    }

    /// Resolve a city name.
    #[must_use]
    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    /// Name of a city, or `"?"` for an unknown id.
    #[must_use]
    pub fn name(&self, id: CityId) -> &str {
        self.city(id).map_or("?", |c| c.name.as_str())
    }

    /// Check if `a` and `b` are directly connected.
    #[must_use]
    pub fn has_edge(&self, a: CityId, b: CityId) -> bool {
        self.adjacency
            .get(a.index())
            .is_some_and(|n| n.contains(&b))
    }

    /// Neighbors of `id` (empty for an unknown id).
    #[must_use]
    pub fn neighbors(&self, id: CityId) -> &[CityId] {
        self.adjacency.get(id.index()).map_or(&[], |n| n.as_slice())
    }

    /// The city closest to `(x, y)` within [`Board::SELECT_RADIUS`].
    #[must_use]
    pub fn city_at(&self, x: i32, y: i32) -> Option<CityId> {
        let radius_sq = i64::from(Self::SELECT_RADIUS).pow(2);
        self.cities
            .iter()
            .map(|c| {
                let dx = i64::from(c.x) - i64::from(x);
                let dy = i64::from(c.y) - i64::from(y);
                (dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)), c.id)
            })
            .filter(|&(d, _)| d < radius_sq)
            .min_by_key(|&(d, _)| d)
            .map(|(_, id)| id)
    }

    /// Total cubes of `color` placed on the board.
    #[must_use]
    pub fn cubes_on_board(&self, color: Color) -> i32 {
        self.cities.iter().map(|c| i32::from(c.cubes(color))).sum()
    }

    /// Cities holding a research station.
    pub fn research_stations(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities
            .iter()
            .filter(|c| c.has_research_station)
            .map(|c| c.id)
    }

    /// Check if `id` holds a research station.
    #[must_use]
    pub fn has_research_station(&self, id: CityId) -> bool {
        self.city(id).is_some_and(|c| c.has_research_station)
    }
}
