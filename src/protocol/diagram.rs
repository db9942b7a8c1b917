//! Text board diagrams.
//!
//! One character per point: `.` empty, `X` black, `O` white, `x` dead black,
//! `o` dead white. Rows run top to bottom and are separated by `/` or
//! newlines, so a whole board fits in one protocol token.
//!
//! Classification output uses the same layout with its own alphabet; see
//! [`format_classification`].

use thiserror::Error;

use crate::analysis::LocScore;
use crate::board::{BoardError, Color, Grid, Position};

/// Errors that can occur while reading a diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram character '{ch}' at ({x}, {y})")]
    InvalidChar { ch: char, x: usize, y: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses a diagram into a validated position. Blank rows are skipped and
/// surrounding whitespace on each row is ignored.
pub fn parse_diagram(text: &str) -> Result<Position, DiagramError> {
    let mut stones: Vec<Vec<u8>> = Vec::new();
    let mut dead: Vec<Vec<bool>> = Vec::new();

    let rows = text.split(['/', '\n']).map(str::trim).filter(|row| !row.is_empty());
    for (y, row) in rows.enumerate() {
        let mut codes = Vec::with_capacity(row.len());
        let mut marks = Vec::with_capacity(row.len());
        for (x, ch) in row.chars().enumerate() {
            let (cell, is_dead) = match ch {
                '.' => (None, false),
                'X' => (Some(Color::Black), false),
                'O' => (Some(Color::White), false),
                'x' => (Some(Color::Black), true),
                'o' => (Some(Color::White), true),
                _ => return Err(DiagramError::InvalidChar { ch, x, y }),
            };
            codes.push(cell.map_or(0, Color::code));
            marks.push(is_dead);
        }
        stones.push(codes);
        dead.push(marks);
    }

    Ok(Position::from_codes(&stones, &dead)?)
}

/// Encodes a position as a single-line diagram with `/` row separators.
pub fn encode_diagram(position: &Position) -> String {
    let rows: Vec<String> = position
        .stones()
        .rows()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &stone)| {
                    let loc = position.stones().loc(x, y);
                    match stone {
                        None => '.',
                        Some(color) if position.is_dead(loc) => color.dead_char(),
                        Some(color) => color.stone_char(),
                    }
                })
                .collect()
        })
        .collect();
    rows.join("/")
}

fn classification_char(position: &Position, scores: &Grid<LocScore>, x: usize, y: usize) -> char {
    let loc = position.stones().loc(x, y);
    let score = &scores[loc];
    if let Some(color) = position.stone(loc) {
        return if position.is_dead(loc) {
            color.dead_char()
        } else {
            color.stone_char()
        };
    }
    match (score.seki, score.territory) {
        (Some(Color::Black), _) => 'B',
        (Some(Color::White), _) => 'W',
        (None, Some(Color::Black)) => 'b',
        (None, Some(Color::White)) => 'w',
        (None, None) if score.is_false_eye => 'f',
        (None, None) if score.is_dame => '.',
        (None, None) => '-',
    }
}

/// Renders a classification, one row per line.
///
/// Stones keep their diagram characters. Empty points show `b`/`w` for
/// territory, `B`/`W` for seki, `f` for an unscored false eye, `.` for dame
/// and `-` for anything else.
pub fn format_classification(position: &Position, scores: &Grid<LocScore>) -> String {
    let mut out = String::with_capacity((position.width() + 1) * position.height());
    for y in 0..position.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..position.width() {
            out.push(classification_char(position, scores, x, y));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_point_kinds() {
        let pos = parse_diagram(".XOxo").unwrap();
        assert_eq!(pos.width(), 5);
        assert_eq!(pos.height(), 1);
        assert!(pos.is_empty_point(0));
        assert!(pos.is_live(1, Color::Black));
        assert!(pos.is_live(2, Color::White));
        assert!(pos.is_dead_stone(3, Color::Black));
        assert!(pos.is_dead_stone(4, Color::White));
    }

    #[test]
    fn slash_and_newline_separators_are_equivalent() {
        let a = parse_diagram(".X/O.").unwrap();
        let b = parse_diagram("  .X\n  O.\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_character_is_reported_with_coordinates() {
        let err = parse_diagram("../.#").unwrap_err();
        assert_eq!(err, DiagramError::InvalidChar { ch: '#', x: 1, y: 1 });
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_diagram("../...").unwrap_err();
        assert_eq!(
            err,
            DiagramError::Board(BoardError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn empty_diagram_is_rejected() {
        assert_eq!(parse_diagram(" / ").unwrap_err(), DiagramError::Board(BoardError::Empty));
    }

    #[test]
    fn encode_matches_input() {
        let text = ".Xo/xO.";
        assert_eq!(encode_diagram(&parse_diagram(text).unwrap()), text);
    }

    #[test]
    fn classification_rendering() {
        let pos = parse_diagram(".XO./.XO.").unwrap();
        let scores = crate::score::classify(&pos, false).unwrap();
        assert_eq!(format_classification(&pos, &scores), "BXOW\nBXOW");

        let pos = parse_diagram(".X./X.X/.X.").unwrap();
        let scores = crate::score::classify(&pos, false).unwrap();
        assert_eq!(format_classification(&pos, &scores), "bXb\nXbX\nbXb");

        let pos = parse_diagram(".../...").unwrap();
        let scores = crate::score::classify(&pos, false).unwrap();
        assert_eq!(format_classification(&pos, &scores), "...\n...");
    }
}
