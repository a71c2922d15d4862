//! Pathogen colors.

use serde::{Deserialize, Serialize};

/// One of the four diseases. Every city belongs to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Yellow,
    Black,
    Red,
}

impl Color {
    /// All colors in board order.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Black, Color::Red];

    /// Dense index for per-color arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Black => "Black",
            Color::Red => "Red",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color storage.
pub type PerColor<T> = [T; 4];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"Yellow\"");
        let back: Color = serde_json::from_str("\"Red\"").unwrap();
        assert_eq!(back, Color::Red);
    }
}
