//! Connection blocks.
//!
//! Small shapes where the opponent cannot usefully enter a point: a
//! bamboo-joint gap or the inside of a tiger's mouth. Such a point is
//! marked with the color whose shape it is, and the opponent's blocked
//! reachability stops there.
//!
//! Templates are matched in all eight orientations so the result is
//! independent of how the board is reflected or rotated.

use std::sync::LazyLock;

use crate::board::{Color, Grid, Loc, Position, Symmetry, ALL_COLORS};

/// Requirement of one template cell, from the perspective of `pla`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    /// `p`: a live `pla` stone.
    Friendly,
    /// `o`: empty, a live `pla` stone, or a dead opponent stone.
    NotHostile,
    /// `c`: an empty point; the point that gets marked.
    Target,
    /// `@`: off the board.
    OffBoard,
    /// `?`: anything, on or off the board.
    Any,
}

impl Cell {
    fn from_char(c: char) -> Cell {
        match c {
            'p' => Cell::Friendly,
            'o' => Cell::NotHostile,
            'c' => Cell::Target,
            '@' => Cell::OffBoard,
            _ => Cell::Any,
        }
    }
}

const BAMBOO_GAP: [&str; 3] = ["pp", "co", "pp"];
const TIGER_MOUTH: [&str; 3] = ["?p?", "pcp", "?o?"];
const EDGE_TIGER_MOUTH: [&str; 3] = ["?o?", "pcp", "@@@"];

const TEMPLATES: [[&str; 3]; 3] = [BAMBOO_GAP, TIGER_MOUTH, EDGE_TIGER_MOUTH];

/// A template in one orientation, as offsets relative to its target cell.
#[derive(Debug)]
struct Oriented {
    cells: Vec<(isize, isize, Cell)>,
}

/// Every template in every orientation. Orientations of symmetric templates
/// repeat; matching them twice is harmless.
static ORIENTED: LazyLock<Vec<Oriented>> = LazyLock::new(|| {
    let mut out = Vec::with_capacity(TEMPLATES.len() * Symmetry::ALL.len());
    for rows in TEMPLATES {
        let mut raw = Vec::new();
        let mut target = (0isize, 0isize);
        for (ty, row) in rows.iter().enumerate() {
            for (tx, ch) in row.chars().enumerate() {
                let cell = Cell::from_char(ch);
                if cell == Cell::Target {
                    target = (tx as isize, ty as isize);
                }
                raw.push((tx as isize, ty as isize, cell));
            }
        }
        for sym in Symmetry::ALL {
            let cells = raw
                .iter()
                .filter(|&&(_, _, cell)| cell != Cell::Any)
                .map(|&(tx, ty, cell)| {
                    let (dx, dy) = sym.map_offset(tx - target.0, ty - target.1);
                    (dx, dy, cell)
                })
                .collect();
            out.push(Oriented { cells });
        }
    }
    out
});

/// Marks every point that a connection shape protects.
///
/// `result[loc] == Some(c)` means a shape of `c` blocks `c`'s opponent at
/// `loc`. Later matches overwrite earlier ones.
pub fn mark_connection_blocks(position: &Position) -> Grid<Option<Color>> {
    let grid = position.stones();
    let mut blocks = Grid::new(position.width(), position.height(), None);

    for pla in ALL_COLORS {
        for oriented in ORIENTED.iter() {
            for loc in grid.locs() {
                if matches_at(position, oriented, loc, pla) {
                    blocks[loc] = Some(pla);
                }
            }
        }
    }

    blocks
}

fn matches_at(position: &Position, oriented: &Oriented, target: Loc, pla: Color) -> bool {
    let grid = position.stones();
    let opp = pla.opposite();
    oriented.cells.iter().all(|&(dx, dy, cell)| {
        let at = grid.offset(target, dx, dy);
        match (cell, at) {
            (Cell::OffBoard, at) => at.is_none(),
            (Cell::Any, _) => true,
            (_, None) => false,
            (Cell::Friendly, Some(loc)) => position.is_live(loc, pla),
            (Cell::NotHostile, Some(loc)) => {
                position.is_empty_point(loc) || position.is_live(loc, pla) || position.is_dead_stone(loc, opp)
            }
            (Cell::Target, Some(loc)) => position.is_empty_point(loc),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::diagram::parse_diagram;

    fn blocked_points(diagram: &str) -> Vec<((usize, usize), Color)> {
        let pos = parse_diagram(diagram).unwrap();
        let blocks = mark_connection_blocks(&pos);
        blocks
            .enumerate()
            .filter_map(|(loc, b)| b.map(|c| (pos.stones().xy(loc), c)))
            .collect()
    }

    #[test]
    fn bamboo_joint_gap_blocks_both_points() {
        let found = blocked_points(
            "....\n\
             .XX.\n\
             ....\n\
             .XX.\n\
             ....",
        );
        assert!(found.contains(&((1, 2), Color::Black)));
        assert!(found.contains(&((2, 2), Color::Black)));
    }

    #[test]
    fn tiger_mouth_blocks_its_inside() {
        let found = blocked_points(
            ".....\n\
             ..O..\n\
             .O.O.\n\
             .....",
        );
        assert_eq!(found, vec![((2, 2), Color::White)]);
    }

    #[test]
    fn edge_tiger_mouth_needs_the_edge() {
        let on_edge = blocked_points(
            "...\n\
             X.X",
        );
        assert_eq!(on_edge, vec![((1, 1), Color::Black)]);

        let off_edge = blocked_points(
            "...\n\
             X.X\n\
             ...",
        );
        assert!(off_edge.is_empty());
    }

    #[test]
    fn hostile_stone_in_the_mouth_opening_prevents_a_block() {
        let found = blocked_points(
            "..X..\n\
             .X.X.\n\
             ..O..",
        );
        assert!(found.is_empty());
    }

    #[test]
    fn dead_stones_do_not_count_as_friendly() {
        let found = blocked_points(
            ".....\n\
             ..x..\n\
             .X.X.\n\
             .....",
        );
        assert!(found.is_empty());
    }

    #[test]
    fn every_orientation_is_matched() {
        let base = parse_diagram(
            "......\n\
             .XX...\n\
             ......\n\
             .XX...\n\
             ......",
        )
        .unwrap();
        let expected = mark_connection_blocks(&base);
        for sym in Symmetry::ALL {
            let mapped = mark_connection_blocks(&base.map_symmetry(sym));
            assert_eq!(mapped.map_symmetry(sym.inverse()), expected, "{:?}", sym);
        }
    }
}
