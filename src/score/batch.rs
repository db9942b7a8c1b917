//! Scoring many dead-stone hypotheses for one stone layout.
//!
//! Each hypothesis is an independent pure call, so they run on the rayon
//! pool with no shared state.

use rayon::prelude::*;

use crate::board::{Grid, Position};

use super::{score, Score, ScoreError, ScoringConfig};

/// Scores `position` once per dead-mark grid in `hypotheses`. Results keep
/// the input order.
pub fn score_hypotheses(
    position: &Position,
    hypotheses: &[Grid<bool>],
    config: &ScoringConfig,
) -> Vec<Result<Score, ScoreError>> {
    hypotheses
        .par_iter()
        .map(|dead| {
            let marked = position.with_dead_marks(dead)?;
            score(&marked, config)
        })
        .collect()
}
