//! Public scoring entry points.
//!
//! Territory scoring runs the full analysis and counts territory, prisoners
//! and captures. Area scoring only needs strict reachability.

pub mod batch;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::{analyze, mark_scoring, InternalError, LocScore};
use crate::analysis::reach::mark_reachability;
use crate::board::{BoardError, Color, Grid, Position};

pub use batch::score_hypotheses;

/// Default komi under territory and area rules.
pub const DEFAULT_KOMI: f64 = 6.5;

/// Errors from the scoring entry points.
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid position: {0}")]
    Invalid(#[from] BoardError),

    #[error("internal error: {0}")]
    Internal(#[from] InternalError),
}

/// Final points for each side. Komi is included in `white`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Score {
    pub black: f64,
    pub white: f64,
}

impl Score {
    /// Black's lead; negative when white is ahead.
    pub fn margin(&self) -> f64 {
        self.black - self.white
    }

    pub fn winner(&self) -> Option<Color> {
        let margin = self.margin();
        if margin > 0.0 {
            Some(Color::Black)
        } else if margin < 0.0 {
            Some(Color::White)
        } else {
            None
        }
    }
}

impl fmt::Display for Score {
    /// Conventional result notation: `B+3.5`, `W+0.5` or `0` for a draw.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(Color::Black) => write!(f, "B+{}", self.margin()),
            Some(Color::White) => write!(f, "W+{}", -self.margin()),
            None => write!(f, "0"),
        }
    }
}

/// Stones captured during play, by the capturing color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

/// Counting method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rules {
    /// Territory plus prisoners plus captures.
    #[default]
    Territory,
    /// Exclusively reached points, stones included.
    Area,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rules {0:?}")]
pub struct UnknownRules(pub String);

impl FromStr for Rules {
    type Err = UnknownRules;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "territory" | "japanese" => Ok(Rules::Territory),
            "area" | "chinese" => Ok(Rules::Area),
            _ => Err(UnknownRules(s.to_string())),
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rules::Territory => write!(f, "territory"),
            Rules::Area => write!(f, "area"),
        }
    }
}

/// Everything a caller can choose about how a position is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub rules: Rules,
    pub komi: f64,
    pub captures: Captures,
    /// Count false eye points as territory when they are otherwise scorable.
    pub score_false_eyes: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            rules: Rules::Territory,
            komi: DEFAULT_KOMI,
            captures: Captures::default(),
            score_false_eyes: false,
        }
    }
}

/// Classifies every point of the position.
pub fn classify(position: &Position, score_false_eyes: bool) -> Result<Grid<LocScore>, ScoreError> {
    let analysis = analyze(position)?;
    Ok(mark_scoring(position, &analysis, score_false_eyes))
}

/// Territory score: territory, prisoners inside enemy regions, captures and
/// komi.
pub fn territory_score(
    position: &Position,
    captures: Captures,
    komi: f64,
    score_false_eyes: bool,
) -> Result<Score, ScoreError> {
    let analysis = analyze(position)?;
    let scores = mark_scoring(position, &analysis, score_false_eyes);

    let mut score = Score {
        black: f64::from(captures.black),
        white: f64::from(captures.white) + komi,
    };
    let mut credit = |color: Color| match color {
        Color::Black => score.black += 1.0,
        Color::White => score.white += 1.0,
    };

    for loc in position.stones().locs() {
        if let Some(owner) = scores[loc].territory {
            credit(owner);
        }
        let (Some(stone), Some(region)) = (position.stone(loc), analysis.region_ids[loc]) else {
            continue;
        };
        if position.is_dead(loc) && analysis.regions[region].color == stone.opposite() {
            credit(stone.opposite());
        }
    }

    log::debug!("territory score: black {} white {}", score.black, score.white);
    Ok(score)
}

/// Area score: every point reached by exactly one color counts for it.
pub fn area_score(position: &Position, komi: f64) -> Score {
    let reach = mark_reachability(position, None);
    let mut score = Score {
        black: 0.0,
        white: komi,
    };
    for loc in position.stones().locs() {
        if reach.exclusive(Color::Black, loc) {
            score.black += 1.0;
        } else if reach.exclusive(Color::White, loc) {
            score.white += 1.0;
        }
    }

    log::debug!("area score: black {} white {}", score.black, score.white);
    score
}

/// Scores the position under `config`.
pub fn score(position: &Position, config: &ScoringConfig) -> Result<Score, ScoreError> {
    match config.rules {
        Rules::Territory => territory_score(position, config.captures, config.komi, config.score_false_eyes),
        Rules::Area => Ok(area_score(position, config.komi)),
    }
}
