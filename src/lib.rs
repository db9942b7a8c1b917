//! jigo engine library.
//!
//! Exposes the board representation, the territory and seki analysis, the
//! scoring entry points and the protocol modules for use by integration tests
//! and the binary entry point.

pub mod analysis;
pub mod board;
pub mod engine;
pub mod protocol;
pub mod score;

pub use board::{BoardError, Color, Grid, Loc, Position};
pub use score::{area_score, classify, score, territory_score, Captures, Rules, Score, ScoreError, ScoringConfig};
