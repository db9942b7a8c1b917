//! Rectangular per-point storage.
//!
//! A location is the single integer `y * width + x`, which keeps point sets
//! and id tables as plain `Vec`s indexed by location.

use std::ops::{Index, IndexMut};

use serde::Serialize;

/// A point on the board, encoded as `y * width + x`.
pub type Loc = usize;

/// A width × height table with one `T` per point, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every point set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by evaluating `f(loc)` for every location in order.
    pub fn from_fn(width: usize, height: usize, f: impl FnMut(Loc) -> T) -> Self {
        Grid {
            width,
            height,
            cells: (0..width * height).map(f).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of points on the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the location of `(x, y)`. The coordinates must be in bounds.
    pub fn loc(&self, x: usize, y: usize) -> Loc {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Returns `(x, y)` for a location.
    pub fn xy(&self, loc: Loc) -> (usize, usize) {
        (loc % self.width, loc / self.width)
    }

    /// Returns the location at `(x, y)`, or `None` if it is off the board.
    pub fn checked_loc(&self, x: isize, y: isize) -> Option<Loc> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Returns the location offset from `loc` by `(dx, dy)`, if on the board.
    pub fn offset(&self, loc: Loc, dx: isize, dy: isize) -> Option<Loc> {
        let (x, y) = self.xy(loc);
        self.checked_loc(x as isize + dx, y as isize + dy)
    }

    /// Iterates over the on-board orthogonal neighbours of `loc`.
    pub fn neighbors(&self, loc: Loc) -> impl Iterator<Item = Loc> {
        let (x, y) = self.xy(loc);
        let (w, h) = (self.width, self.height);
        let up = (y > 0).then(|| loc - w);
        let left = (x > 0).then(|| loc - 1);
        let right = (x + 1 < w).then(|| loc + 1);
        let down = (y + 1 < h).then(|| loc + w);
        [up, left, right, down].into_iter().flatten()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates over `(loc, &value)` pairs.
    pub fn enumerate(&self) -> impl Iterator<Item = (Loc, &T)> {
        self.cells.iter().enumerate()
    }

    /// All locations in row-major order.
    pub fn locs(&self) -> std::ops::Range<Loc> {
        0..self.cells.len()
    }

    /// Returns the rows as slices, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.width.max(1))
    }
}

impl<T> Index<Loc> for Grid<T> {
    type Output = T;

    fn index(&self, loc: Loc) -> &T {
        &self.cells[loc]
    }
}

impl<T> IndexMut<Loc> for Grid<T> {
    fn index_mut(&mut self, loc: Loc) -> &mut T {
        &mut self.cells[loc]
    }
}
