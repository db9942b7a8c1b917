//! Engine state management.
//!
//! Holds the current position, capture counts and engine options between
//! commands, and answers `classify` and `score` from them.

use std::collections::HashMap;
use std::io::{self, Write};

use thiserror::Error;

use crate::board::Position;
use crate::protocol::diagram::{format_classification, parse_diagram, DiagramError};
use crate::protocol::json::{format_classification_json, parse_position_json, JsonError};
use crate::score::{classify, score, Captures, Rules, ScoreError, ScoringConfig, DEFAULT_KOMI};

/// Errors raised while handling a command. The main loop logs them and
/// carries on.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no position set")]
    NoPosition,

    #[error("failed to parse diagram: {0}")]
    Diagram(#[from] DiagramError),

    #[error("failed to parse JSON position: {0}")]
    Json(#[from] JsonError),

    #[error("({x}, {y}) is off the board")]
    OffBoard { x: usize, y: usize },

    #[error("no stone at ({x}, {y})")]
    NoStone { x: usize, y: usize },

    #[error("invalid value {value:?} for option {name}")]
    InvalidOption { name: String, value: String },

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How `classify` and `score` write their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Position>,
    pub captures: Captures,
    pub options: HashMap<String, String>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine with no position.
    pub fn new() -> Self {
        Engine {
            position: None,
            captures: Captures::default(),
            options: HashMap::new(),
        }
    }

    /// Resets the position and captures for a new game. Options persist.
    pub fn new_game(&mut self) {
        self.position = None;
        self.captures = Captures::default();
    }

    /// Sets the current position from a diagram.
    pub fn set_position(&mut self, diagram: &str) -> Result<(), EngineError> {
        self.position = Some(parse_diagram(diagram)?);
        Ok(())
    }

    /// Sets the current position from a JSON object.
    pub fn set_position_json(&mut self, json: &str) -> Result<(), EngineError> {
        self.position = Some(parse_position_json(json)?);
        Ok(())
    }

    pub fn set_captures(&mut self, black: u32, white: u32) {
        self.captures = Captures { black, white };
    }

    /// Flips the dead mark of the stone at `(x, y)` and returns the new mark.
    pub fn toggle_dead(&mut self, x: usize, y: usize) -> Result<bool, EngineError> {
        let position = self.position.as_mut().ok_or(EngineError::NoPosition)?;
        let loc = position
            .stones()
            .checked_loc(x as isize, y as isize)
            .ok_or(EngineError::OffBoard { x, y })?;
        let dead = !position.is_dead(loc);
        if !position.set_dead(loc, dead) {
            return Err(EngineError::NoStone { x, y });
        }
        Ok(dead)
    }

    /// Sets an engine option. A missing value is stored as empty.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    fn invalid(name: &str, value: &str) -> EngineError {
        EngineError::InvalidOption {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Builds the scoring configuration from the options and captures.
    pub fn config(&self) -> Result<ScoringConfig, EngineError> {
        let komi = match self.option("Komi") {
            Some(v) => v.parse::<f64>().map_err(|_| Self::invalid("Komi", v))?,
            None => DEFAULT_KOMI,
        };
        let rules = match self.option("Rules") {
            Some(v) => v.parse::<Rules>().map_err(|_| Self::invalid("Rules", v))?,
            None => Rules::default(),
        };
        let score_false_eyes = match self.option("ScoreFalseEyes") {
            None | Some("false") => false,
            Some("" | "true") => true,
            Some(v) => return Err(Self::invalid("ScoreFalseEyes", v)),
        };
        Ok(ScoringConfig {
            rules,
            komi,
            captures: self.captures,
            score_false_eyes,
        })
    }

    /// Returns the configured output format (default text).
    pub fn output_format(&self) -> Result<OutputFormat, EngineError> {
        match self.option("Output") {
            None | Some("text") => Ok(OutputFormat::Text),
            Some("json") => Ok(OutputFormat::Json),
            Some(v) => Err(Self::invalid("Output", v)),
        }
    }

    fn position(&self) -> Result<&Position, EngineError> {
        self.position.as_ref().ok_or(EngineError::NoPosition)
    }

    /// Handles the GSI handshake: writes id, options and `gsiok`.
    pub fn handle_gsi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name jigo")?;
        writeln!(out, "id author jigo")?;
        writeln!(out, "option name Komi type string default {}", DEFAULT_KOMI)?;
        writeln!(out, "option name Rules type combo default territory var territory var area")?;
        writeln!(out, "option name ScoreFalseEyes type check default false")?;
        writeln!(out, "option name Output type combo default text var text var json")?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "gsiok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `classify`: the per-point classification followed by
    /// `classifyok`, or a single JSON line.
    pub fn handle_classify<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let position = self.position()?;
        let config = self.config()?;
        let scores = classify(position, config.score_false_eyes)?;
        match self.output_format()? {
            OutputFormat::Text => {
                writeln!(out, "{}", format_classification(position, &scores))?;
                writeln!(out, "classifyok")?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", format_classification_json(&scores, None)?)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Handles `score`: one `score` line under the configured rules.
    pub fn handle_score<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let position = self.position()?;
        let config = self.config()?;
        let result = score(position, &config)?;
        match self.output_format()? {
            OutputFormat::Text => writeln!(
                out,
                "score black {} white {} result {}",
                result.black, result.white, result
            )?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&result)?)?,
        }
        out.flush()?;
        Ok(())
    }
}
