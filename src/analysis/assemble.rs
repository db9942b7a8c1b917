//! Per-point classification assembled from a finished [`Analysis`].

use serde::Serialize;

use crate::board::{Color, Grid, Position, ALL_COLORS};

use super::Analysis;

/// What scoring decided about one point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LocScore {
    /// Color whose territory the point is.
    pub territory: Option<Color>,
    /// Color of the seki region the point belongs to.
    pub seki: Option<Color>,
    pub is_false_eye: bool,
    pub is_unscorable_false_eye: bool,
    /// The point belongs to no region.
    pub is_dame: bool,
    /// Value of the eye containing the point, 0 outside eyes.
    pub eye_value: u8,
}

impl LocScore {
    /// The color that owns the point for scoring, if any.
    pub fn owner(&self) -> Option<Color> {
        self.territory
    }
}

/// Classifies every point. With `score_false_eyes` unset, false eye points
/// are never territory.
pub fn mark_scoring(position: &Position, analysis: &Analysis, score_false_eyes: bool) -> Grid<LocScore> {
    let mut scores = Grid::from_fn(position.width(), position.height(), |loc| LocScore {
        is_false_eye: analysis.is_false_eye[loc],
        is_unscorable_false_eye: analysis.is_unscorable_false_eye[loc],
        is_dame: analysis.region_ids[loc].is_none(),
        eye_value: analysis.eye_ids[loc].map_or(0, |eye| analysis.eyes[eye].value),
        ..LocScore::default()
    });

    // Boundary points shared by a black and a white seki region end up white.
    for pla in ALL_COLORS {
        for region in analysis.regions.iter().filter(|r| r.color == pla) {
            if !analysis.is_seki_region(region.id) {
                continue;
            }
            for &loc in &region.points {
                scores[loc].seki = Some(pla);
            }
        }
    }

    for loc in position.stones().locs() {
        let Some(region) = analysis.region_ids[loc] else {
            continue;
        };
        if analysis.is_seki_region(region) || !position.is_vacant(loc) {
            continue;
        }
        let pla = analysis.regions[region].color;
        let score = &mut scores[loc];
        let excluded = (score.is_false_eye && !score_false_eyes)
            || score.is_unscorable_false_eye
            || analysis.strict_reach.reaches(pla.opposite(), loc);
        if !excluded {
            score.territory = Some(pla);
        }
    }

    scores
}
