//! Stone colors.
//!
//! A board cell is `Option<Color>`: `None` for an empty point. Numeric codes
//! (0 = empty, 1 = black, 2 = white) are the raw-grid library boundary.

use serde::{Deserialize, Serialize};

/// The color of a stone or of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

/// Both colors, in the order every per-color pass processes them.
pub const ALL_COLORS: [Color; 2] = [Color::Black, Color::White];

impl Color {
    /// Returns the other color.
    pub const fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the numeric cell code (1 = black, 2 = white).
    pub const fn code(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }

    /// Parses a numeric cell code. `Ok(None)` is an empty point; an
    /// unknown code is returned unchanged as the error.
    pub fn from_code(code: u8) -> Result<Option<Color>, u8> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(Color::Black)),
            2 => Ok(Some(Color::White)),
            other => Err(other),
        }
    }

    /// Returns the diagram character for a live stone of this color.
    pub const fn stone_char(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    /// Returns the diagram character for a dead stone of this color.
    pub const fn dead_char(self) -> char {
        match self {
            Color::Black => 'x',
            Color::White => 'o',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for color in ALL_COLORS {
            assert_ne!(color.opposite(), color);
            assert_eq!(color.opposite().opposite(), color);
        }
    }

    #[test]
    fn cell_codes() {
        assert_eq!(Color::from_code(0), Ok(None));
        assert_eq!(Color::from_code(1), Ok(Some(Color::Black)));
        assert_eq!(Color::from_code(2), Ok(Some(Color::White)));
        assert_eq!(Color::from_code(3), Err(3));
        assert_eq!(Color::Black.code(), 1);
        assert_eq!(Color::White.code(), 2);
    }
}
