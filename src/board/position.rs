//! The immutable scoring snapshot: stones plus dead marks.
//!
//! Construction validates the raw input; once a `Position` exists every
//! analysis phase can index it without further checks.

use thiserror::Error;

use super::color::Color;
use super::grid::{Grid, Loc};
use super::symmetry::Symmetry;

/// Input validation failures, raised before any analysis begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no points")]
    Empty,

    #[error("row {row} has {found} points, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid color code {code} at ({x}, {y})")]
    InvalidColor { x: usize, y: usize, code: u8 },

    #[error("dead-mark grid has {found} rows, expected {expected}")]
    DeadMarkRows { expected: usize, found: usize },

    #[error("dead-mark row {row} has {found} points, expected {expected}")]
    DeadMarkRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A board position with an explicit dead-stone marking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    stones: Grid<Option<Color>>,
    dead: Grid<bool>,
}

impl Position {
    /// Creates an empty position.
    pub fn empty(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::Empty);
        }
        Ok(Position {
            stones: Grid::new(width, height, None),
            dead: Grid::new(width, height, false),
        })
    }

    /// Builds a position from grids that are already dimensionally checked.
    /// Dead marks on empty points are dropped.
    pub fn from_grids(stones: Grid<Option<Color>>, dead: &Grid<bool>) -> Result<Self, BoardError> {
        if stones.is_empty() {
            return Err(BoardError::Empty);
        }
        if dead.height() != stones.height() {
            return Err(BoardError::DeadMarkRows {
                expected: stones.height(),
                found: dead.height(),
            });
        }
        if dead.width() != stones.width() {
            return Err(BoardError::DeadMarkRowLength {
                row: 0,
                expected: stones.width(),
                found: dead.width(),
            });
        }
        let dead = Grid::from_fn(stones.width(), stones.height(), |loc| {
            dead[loc] && stones[loc].is_some()
        });
        Ok(Position { stones, dead })
    }

    /// Validates raw rows of color codes (0 empty, 1 black, 2 white) and a
    /// parallel dead-mark grid. An empty `dead` slice means nothing is dead.
    pub fn from_codes(stones: &[Vec<u8>], dead: &[Vec<bool>]) -> Result<Self, BoardError> {
        let height = stones.len();
        let width = stones.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in stones.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let cell = Color::from_code(code).map_err(|code| BoardError::InvalidColor { x, y, code })?;
                cells.push(cell);
            }
        }

        let mut marks = Grid::new(width, height, false);
        if !dead.is_empty() {
            if dead.len() != height {
                return Err(BoardError::DeadMarkRows {
                    expected: height,
                    found: dead.len(),
                });
            }
            for (y, row) in dead.iter().enumerate() {
                if row.len() != width {
                    return Err(BoardError::DeadMarkRowLength {
                        row: y,
                        expected: width,
                        found: row.len(),
                    });
                }
                for (x, &is_dead) in row.iter().enumerate() {
                    marks[y * width + x] = is_dead;
                }
            }
        }

        let mut cells = cells.into_iter();
        let stones = Grid::from_fn(width, height, |_| cells.next().flatten());
        Position::from_grids(stones, &marks)
    }

    /// Returns the same stones with a different dead marking.
    pub fn with_dead_marks(&self, dead: &Grid<bool>) -> Result<Position, BoardError> {
        Position::from_grids(self.stones.clone(), dead)
    }

    pub fn width(&self) -> usize {
        self.stones.width()
    }

    pub fn height(&self) -> usize {
        self.stones.height()
    }

    /// The stone grid; used for geometry helpers (`loc`, `neighbors`, ...).
    pub fn stones(&self) -> &Grid<Option<Color>> {
        &self.stones
    }

    pub fn dead_marks(&self) -> &Grid<bool> {
        &self.dead
    }

    pub fn stone(&self, loc: Loc) -> Option<Color> {
        self.stones[loc]
    }

    pub fn is_empty_point(&self, loc: Loc) -> bool {
        self.stones[loc].is_none()
    }

    pub fn is_dead(&self, loc: Loc) -> bool {
        self.dead[loc]
    }

    /// True if `loc` holds a stone of `color` that is not marked dead.
    pub fn is_live(&self, loc: Loc, color: Color) -> bool {
        self.stones[loc] == Some(color) && !self.dead[loc]
    }

    /// True if `loc` holds a dead stone of `color`.
    pub fn is_dead_stone(&self, loc: Loc, color: Color) -> bool {
        self.stones[loc] == Some(color) && self.dead[loc]
    }

    /// True if `loc` is empty for ownership purposes: no stone or a dead one.
    pub fn is_vacant(&self, loc: Loc) -> bool {
        self.stones[loc].is_none() || self.dead[loc]
    }

    /// Marks or unmarks the stone at `loc` as dead. Returns false if there is
    /// no stone there.
    pub fn set_dead(&mut self, loc: Loc, dead: bool) -> bool {
        if self.stones[loc].is_none() {
            return false;
        }
        self.dead[loc] = dead;
        true
    }

    /// Number of live and dead stones of `color`.
    pub fn stone_count(&self, color: Color) -> usize {
        self.stones.iter().filter(|&&s| s == Some(color)).count()
    }

    /// Returns the position with `sym` applied to both grids.
    pub fn map_symmetry(&self, sym: Symmetry) -> Position {
        Position {
            stones: self.stones.map_symmetry(sym),
            dead: self.dead.map_symmetry(sym),
        }
    }
}
