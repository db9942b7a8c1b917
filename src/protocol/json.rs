//! JSON positions and classification output.
//!
//! Input: `{"stones": [[0, 1, 2], ...], "dead": [[false, true, false], ...]}`
//! with color codes 0 = empty, 1 = black, 2 = white. `dead` may be omitted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::LocScore;
use crate::board::{BoardError, Grid, Position};
use crate::score::Score;

/// Errors that can occur while reading a JSON position.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("malformed JSON position: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Debug, Serialize, Deserialize)]
struct PositionJson {
    stones: Vec<Vec<u8>>,
    #[serde(default)]
    dead: Vec<Vec<bool>>,
}

/// Parses and validates a JSON position.
pub fn parse_position_json(text: &str) -> Result<Position, JsonError> {
    let raw: PositionJson = serde_json::from_str(text)?;
    Ok(Position::from_codes(&raw.stones, &raw.dead)?)
}

/// Encodes a position in the input format.
pub fn encode_position_json(position: &Position) -> Result<String, serde_json::Error> {
    let raw = PositionJson {
        stones: position
            .stones()
            .rows()
            .map(|row| row.iter().map(|s| s.map_or(0, |c| c.code())).collect())
            .collect(),
        dead: position.dead_marks().rows().map(<[bool]>::to_vec).collect(),
    };
    serde_json::to_string(&raw)
}

#[derive(Serialize)]
struct ClassificationJson<'a> {
    scores: &'a Grid<LocScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<Score>,
}

/// Serializes a classification grid, optionally with the final score.
pub fn format_classification_json(scores: &Grid<LocScore>, score: Option<Score>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ClassificationJson { scores, score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn parse_with_dead_marks() {
        let pos = parse_position_json(r#"{"stones": [[0, 1], [2, 2]], "dead": [[false, false], [true, false]]}"#).unwrap();
        assert_eq!(pos.width(), 2);
        assert!(pos.is_live(1, Color::Black));
        assert!(pos.is_dead_stone(2, Color::White));
        assert!(pos.is_live(3, Color::White));
    }

    #[test]
    fn dead_marks_are_optional() {
        let pos = parse_position_json(r#"{"stones": [[1, 0, 2]]}"#).unwrap();
        assert!(pos.dead_marks().iter().all(|&d| !d));
    }

    #[test]
    fn invalid_color_code_is_a_board_error() {
        let err = parse_position_json(r#"{"stones": [[0, 3]]}"#).unwrap_err();
        assert!(matches!(err, JsonError::Board(BoardError::InvalidColor { x: 1, y: 0, code: 3 })));
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(matches!(parse_position_json("{\"stones\":").unwrap_err(), JsonError::Syntax(_)));
    }

    #[test]
    fn encoded_position_parses_back() {
        let text = r#"{"stones":[[0,1],[2,2]],"dead":[[false,false],[true,false]]}"#;
        let pos = parse_position_json(text).unwrap();
        assert_eq!(encode_position_json(&pos).unwrap(), text);
    }

    #[test]
    fn classification_json_has_grid_fields() {
        let pos = parse_position_json(r#"{"stones": [[0, 0]]}"#).unwrap();
        let scores = crate::score::classify(&pos, false).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&format_classification_json(&scores, None).unwrap()).unwrap();
        assert_eq!(value["scores"]["width"], 2);
        assert_eq!(value["scores"]["cells"][0]["is_dame"], true);
        assert!(value.get("score").is_none());
    }
}
