//! The eight symmetries of a rectangular grid (the dihedral group D4).
//!
//! A symmetry flips x, then flips y, then optionally transposes. Transposing
//! swaps the width and height of the board it is applied to.

use super::grid::{Grid, Loc};

/// One of the eight reflections/rotations of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symmetry {
    pub flip_x: bool,
    pub flip_y: bool,
    pub transpose: bool,
}

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry {
        flip_x: false,
        flip_y: false,
        transpose: false,
    };

    /// All eight symmetries, identity first.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::IDENTITY,
        Symmetry {
            flip_x: true,
            flip_y: false,
            transpose: false,
        },
        Symmetry {
            flip_x: false,
            flip_y: true,
            transpose: false,
        },
        Symmetry {
            flip_x: true,
            flip_y: true,
            transpose: false,
        },
        Symmetry {
            flip_x: false,
            flip_y: false,
            transpose: true,
        },
        Symmetry {
            flip_x: true,
            flip_y: false,
            transpose: true,
        },
        Symmetry {
            flip_x: false,
            flip_y: true,
            transpose: true,
        },
        Symmetry {
            flip_x: true,
            flip_y: true,
            transpose: true,
        },
    ];

    /// Returns the symmetry that undoes this one.
    pub const fn inverse(self) -> Symmetry {
        if self.transpose {
            Symmetry {
                flip_x: self.flip_y,
                flip_y: self.flip_x,
                transpose: true,
            }
        } else {
            self
        }
    }

    /// Dimensions of a `width × height` board after the transform.
    pub const fn dims(self, width: usize, height: usize) -> (usize, usize) {
        if self.transpose {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Maps `(x, y)` on a `width × height` board to the transformed board.
    pub const fn map_xy(self, x: usize, y: usize, width: usize, height: usize) -> (usize, usize) {
        let x = if self.flip_x { width - 1 - x } else { x };
        let y = if self.flip_y { height - 1 - y } else { y };
        if self.transpose {
            (y, x)
        } else {
            (x, y)
        }
    }

    /// Maps a relative offset. Used for pattern templates, where there is no
    /// board size to reflect against.
    pub const fn map_offset(self, dx: isize, dy: isize) -> (isize, isize) {
        let dx = if self.flip_x { -dx } else { dx };
        let dy = if self.flip_y { -dy } else { dy };
        if self.transpose {
            (dy, dx)
        } else {
            (dx, dy)
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Returns a copy of the grid with `sym` applied.
    pub fn map_symmetry(&self, sym: Symmetry) -> Grid<T> {
        let (width, height) = sym.dims(self.width(), self.height());
        let inverse = sym.inverse();
        Grid::from_fn(width, height, |loc: Loc| {
            let (x, y) = (loc % width, loc / width);
            let (ox, oy) = inverse.map_xy(x, y, width, height);
            self[self.loc(ox, oy)].clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trips_every_point() {
        let (w, h) = (5, 3);
        for sym in Symmetry::ALL {
            let (tw, th) = sym.dims(w, h);
            for y in 0..h {
                for x in 0..w {
                    let (tx, ty) = sym.map_xy(x, y, w, h);
                    assert!(tx < tw && ty < th);
                    assert_eq!(sym.inverse().map_xy(tx, ty, tw, th), (x, y), "{:?}", sym);
                }
            }
        }
    }

    #[test]
    fn map_symmetry_moves_values_with_points() {
        let grid = Grid::from_fn(3, 2, |loc| loc);
        for sym in Symmetry::ALL {
            let mapped = grid.map_symmetry(sym);
            for loc in grid.locs() {
                let (x, y) = grid.xy(loc);
                let (tx, ty) = sym.map_xy(x, y, 3, 2);
                assert_eq!(mapped[mapped.loc(tx, ty)], loc);
            }
            assert_eq!(mapped.map_symmetry(sym.inverse()), grid);
        }
    }
}
