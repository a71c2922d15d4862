//! Cube supply and cure status per disease.
//!
//! The registry is pure bookkeeping: it never looks at the board. The engine
//! keeps it in step with the cubes it places and removes, so that for every
//! color `remaining + cubes on board == cubes_per_color`.
//!
//! `remaining` is signed. Placing cubes from an empty supply drives it below
//! zero, which is exactly the "out of cubes" defeat condition.

use serde::{Deserialize, Serialize};

use super::color::{Color, PerColor};

/// Status of a single disease.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseStatus {
    /// Cubes still in the supply.
    pub remaining: i32,
    /// One-way: once cured, always cured.
    pub cured: bool,
}

/// Tracks all four diseases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRegistry {
    status: PerColor<DiseaseStatus>,
    cubes_per_color: i32,
}

impl DiseaseRegistry {
    /// Create a registry with a full supply of each color.
    #[must_use]
    pub fn new(cubes_per_color: i32) -> Self {
        Self {
            status: [DiseaseStatus {
                remaining: cubes_per_color,
                cured: false,
            }; 4],
            cubes_per_color,
        }
    }

    /// Status of `color`.
    #[must_use]
    pub fn status(&self, color: Color) -> DiseaseStatus {
        self.status[color.index()]
    }

    /// Cubes of `color` still in the supply.
    #[must_use]
    pub fn remaining(&self, color: Color) -> i32 {
        self.status[color.index()].remaining
    }

    /// Total cubes left across all colors.
    #[must_use]
    pub fn total_remaining(&self) -> i32 {
        self.status.iter().map(|s| s.remaining).sum()
    }

    /// Starting supply per color.
    #[must_use]
    pub fn cubes_per_color(&self) -> i32 {
        self.cubes_per_color
    }

    /// Check if `color` is cured.
    #[must_use]
    pub fn is_cured(&self, color: Color) -> bool {
        self.status[color.index()].cured
    }

    /// Cured with every cube back in the supply.
    #[must_use]
    pub fn is_eradicated(&self, color: Color) -> bool {
        let status = self.status[color.index()];
        status.cured && status.remaining == self.cubes_per_color
    }

    /// Take `count` cubes out of the supply.
    pub fn take(&mut self, color: Color, count: u8) {
        self.status[color.index()].remaining -= i32::from(count);
    }

    /// Return `count` cubes to the supply.
    pub fn give_back(&mut self, color: Color, count: u8) {
        self.status[color.index()].remaining += i32::from(count);
    }

    /// Mark `color` cured. Returns false if it already was.
    pub fn cure(&mut self, color: Color) -> bool {
        let status = &mut self.status[color.index()];
        if status.cured {
            return false;
        }
        status.cured = true;
        true
    }

    /// Check if every disease is cured.
    #[must_use]
    pub fn all_cured(&self) -> bool {
        self.status.iter().all(|s| s.cured)
    }

    /// First color whose supply is exhausted.
    #[must_use]
    pub fn depleted(&self) -> Option<Color> {
        Color::ALL.into_iter().find(|&c| self.remaining(c) <= 0)
    }
}
