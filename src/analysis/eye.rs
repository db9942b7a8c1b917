//! Potential eyes: connected empty or dead-stone space inside a region.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::{Color, Grid, Loc, Position};

use super::macrochain::MacrochainInfo;
use super::reach::Reach;
use super::region::RegionInfo;

/// One eye space and what the later passes learned about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EyeInfo {
    pub id: usize,
    pub color: Color,
    pub region: usize,
    pub potential_points: Vec<Loc>,
    /// Potential points that are not false eyes; set during valuation.
    pub real_points: Vec<Loc>,
    /// Some point is strictly reached by both colors.
    pub is_loose: bool,
    /// For each adjacent macrochain of the eye's color, the eye points
    /// touching it.
    pub macrochain_neighbors_from: BTreeMap<usize, BTreeSet<Loc>>,
    /// 0, 1 or 2; set during valuation.
    pub value: u8,
}

/// Finds the potential eyes of every region and cross-links them with the
/// macrochains that surround them.
pub fn mark_potential_eyes(
    position: &Position,
    strict_reach: &Reach,
    region_ids: &Grid<Option<usize>>,
    regions: &mut [RegionInfo],
    macrochain_ids: &Grid<Option<usize>>,
    macrochains: &mut [MacrochainInfo],
) -> (Grid<Option<usize>>, Vec<EyeInfo>) {
    let grid = position.stones();
    let mut eye_ids: Grid<Option<usize>> = Grid::new(position.width(), position.height(), None);
    let mut eyes = Vec::new();
    let mut stack = Vec::new();

    for region in regions.iter_mut() {
        for &seed in &region.points {
            if region_ids[seed] != Some(region.id) || macrochain_ids[seed].is_some() || eye_ids[seed].is_some() {
                continue;
            }

            let id = eyes.len();
            let mut points = Vec::new();
            let mut neighbors_from: BTreeMap<usize, BTreeSet<Loc>> = BTreeMap::new();
            let mut is_loose = false;

            eye_ids[seed] = Some(id);
            stack.push(seed);
            while let Some(cur) = stack.pop() {
                points.push(cur);
                is_loose |= strict_reach.both(cur);
                for next in grid.neighbors(cur) {
                    if let Some(m) = macrochain_ids[next] {
                        if macrochains[m].color == region.color {
                            neighbors_from.entry(m).or_default().insert(cur);
                            macrochains[m].eye_neighbors_from.entry(id).or_default().insert(cur);
                        }
                        continue;
                    }
                    if region_ids[next] == Some(region.id) && eye_ids[next].is_none() {
                        eye_ids[next] = Some(id);
                        stack.push(next);
                    }
                }
            }

            points.sort_unstable();
            region.eyes.push(id);
            eyes.push(EyeInfo {
                id,
                color: region.color,
                region: region.id,
                potential_points: points,
                real_points: Vec::new(),
                is_loose,
                macrochain_neighbors_from: neighbors_from,
                value: 0,
            });
        }
    }

    (eye_ids, eyes)
}
