//! Cities and their mutable per-game state.

use serde::{Deserialize, Serialize};

use crate::disease::{Color, PerColor};

/// Dense city identifier: the index of the city in map order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u8);

impl CityId {
    /// Create a city identifier.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Index into per-city storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "City({})", self.0)
    }
}

/// Static definition of a city, as stored in map data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDef {
    pub name: String,
    pub color: Color,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    /// Path segments joined by commas.
    #[serde(default)]
    pub image: String,
}

/// A city on the board.
///
/// Cube counts never exceed [`City::MAX_CUBES`] per color: the cube that would
/// go past it is an outbreak instead and is not placed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub color: Color,
    diseases: PerColor<u8>,
    pub has_research_station: bool,
    /// Set while a Quarantine Specialist guards this city.
    pub is_protected: bool,
    pub x: i32,
    pub y: i32,
    pub image: String,
}

impl City {
    /// Most cubes of one color a city can hold.
    pub const MAX_CUBES: u8 = 3;

    /// Create a clean city from its definition.
    #[must_use]
    pub fn from_def(id: CityId, def: &CityDef) -> Self {
        Self {
            id,
            name: def.name.clone(),
            color: def.color,
            diseases: [0; 4],
            has_research_station: false,
            is_protected: false,
            x: def.x,
            y: def.y,
            image: def.image.clone(),
        }
    }

    /// Cubes of `color` in this city.
    #[must_use]
    pub fn cubes(&self, color: Color) -> u8 {
        self.diseases[color.index()]
    }

    /// Cubes of all colors in this city.
    #[must_use]
    pub fn total_cubes(&self) -> u8 {
        self.diseases.iter().sum()
    }

    /// Check if any cube is present.
    #[must_use]
    pub fn has_diseases(&self) -> bool {
        self.diseases.iter().any(|&n| n > 0)
    }

    /// Per-color cube counts.
    #[must_use]
    pub fn diseases(&self) -> &PerColor<u8> {
        &self.diseases
    }

    /// Try to place `count` cubes of `color`.
    ///
    /// Returns `true` when this would reach four or more cubes. In that case
    /// nothing is placed and the caller resolves an outbreak.
    pub fn add_diseases(&mut self, count: u8, color: Color) -> bool {
        let current = self.diseases[color.index()];
        if current.saturating_add(count) > Self::MAX_CUBES {
            return true;
        }
        self.diseases[color.index()] = current + count;
        false
    }

    /// Remove up to `count` cubes of `color`. Returns how many were removed.
    pub fn remove_diseases(&mut self, count: u8, color: Color) -> u8 {
        let current = self.diseases[color.index()];
        let removed = current.min(count);
        self.diseases[color.index()] = current - removed;
        removed
    }

    /// Remove every cube of `color`. Returns how many were removed.
    pub fn clear_diseases(&mut self, color: Color) -> u8 {
        std::mem::take(&mut self.diseases[color.index()])
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)?;
        for color in Color::ALL {
            let n = self.cubes(color);
            if n > 0 {
                write!(f, " {color}:{n}")?;
            }
        }
        Ok(())
    }
}
