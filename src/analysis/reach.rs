//! Reachability from live stones.
//!
//! A color reaches every point connected to one of its live stones through
//! points that are not live opponent stones. The blocked variant also refuses
//! to enter points where the opponent's connection shape blocks it.

use std::collections::VecDeque;

use crate::board::{Color, Grid, Loc, Position};

/// Per-color reachability grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reach {
    pub black: Grid<bool>,
    pub white: Grid<bool>,
}

impl Reach {
    pub fn reaches(&self, color: Color, loc: Loc) -> bool {
        match color {
            Color::Black => self.black[loc],
            Color::White => self.white[loc],
        }
    }

    /// Reached by `color` and not by its opponent.
    pub fn exclusive(&self, color: Color, loc: Loc) -> bool {
        self.reaches(color, loc) && !self.reaches(color.opposite(), loc)
    }

    pub fn both(&self, loc: Loc) -> bool {
        self.black[loc] && self.white[loc]
    }
}

/// Computes reachability for both colors. With `blocks == None` this is the
/// strict variant.
pub fn mark_reachability(position: &Position, blocks: Option<&Grid<Option<Color>>>) -> Reach {
    Reach {
        black: flood(position, blocks, Color::Black),
        white: flood(position, blocks, Color::White),
    }
}

/// True if `pla`'s reach may enter `loc`.
pub(crate) fn passable(position: &Position, blocks: Option<&Grid<Option<Color>>>, loc: Loc, pla: Color) -> bool {
    let opp = pla.opposite();
    if position.is_live(loc, opp) {
        return false;
    }
    !matches!(blocks, Some(b) if b[loc] == Some(opp))
}

fn flood(position: &Position, blocks: Option<&Grid<Option<Color>>>, pla: Color) -> Grid<bool> {
    let grid = position.stones();
    let mut reached = Grid::new(position.width(), position.height(), false);
    let mut queue = VecDeque::new();

    for loc in grid.locs() {
        if position.is_live(loc, pla) {
            reached[loc] = true;
            queue.push_back(loc);
        }
    }

    while let Some(cur) = queue.pop_front() {
        for next in grid.neighbors(cur) {
            if reached[next] || !passable(position, blocks, next, pla) {
                continue;
            }
            reached[next] = true;
            queue.push_back(next);
        }
    }

    reached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::blocks::mark_connection_blocks;
    use crate::protocol::diagram::parse_diagram;

    #[test]
    fn empty_board_is_reached_by_nobody() {
        let pos = Position::empty(3, 3).unwrap();
        let reach = mark_reachability(&pos, None);
        assert!(reach.black.iter().all(|&r| !r));
        assert!(reach.white.iter().all(|&r| !r));
    }

    #[test]
    fn live_stones_stop_the_opponent() {
        let pos = parse_diagram(
            ".X.\n\
             .X.\n\
             .XO",
        )
        .unwrap();
        let reach = mark_reachability(&pos, None);
        // White is walled into the right column.
        assert!(reach.white[pos.stones().loc(2, 0)]);
        assert!(!reach.white[pos.stones().loc(0, 0)]);
        assert!(!reach.white[pos.stones().loc(1, 1)]);
        assert!(reach.black[pos.stones().loc(2, 0)]);
        assert!(!reach.black[pos.stones().loc(2, 2)]);
    }

    #[test]
    fn dead_stones_are_passable() {
        let pos = parse_diagram(
            "X.o.\n\
             ....",
        )
        .unwrap();
        let reach = mark_reachability(&pos, None);
        assert!(reach.black.iter().all(|&r| r));
        assert!(reach.white.iter().all(|&r| !r));
    }

    #[test]
    fn blocks_only_stop_the_blocked_color() {
        // Black tiger's mouth at (1, 1) on the bottom edge, white outside.
        let pos = parse_diagram(
            "O..\n\
             X.X",
        )
        .unwrap();
        let blocks = mark_connection_blocks(&pos);
        let mouth = pos.stones().loc(1, 1);
        assert_eq!(blocks[mouth], Some(Color::Black));

        let strict = mark_reachability(&pos, None);
        let blocked = mark_reachability(&pos, Some(&blocks));
        assert!(strict.white[mouth]);
        assert!(!blocked.white[mouth]);
        assert!(blocked.black[mouth]);
    }
}
