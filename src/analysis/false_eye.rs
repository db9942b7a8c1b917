//! False eyes.
//!
//! An eye point at a bottleneck that touches several macrochain stones is
//! only secure if those stones are connected some other way. The search walks
//! the bipartite graph of macrochains and the other eyes they touch; every
//! neighbouring stone whose macrochain it reaches counts as a connected side.
//!
//! The pass runs twice. The provisional pass precedes valuation and feeds it.
//! The scored pass also accepts two sides that are each independently alive
//! (their reachable eyes are worth two), so it marks a subset of the
//! provisional points, plus the empty eye points next to a marked dead stone.

use std::collections::BTreeSet;

use crate::board::{Grid, Loc, Position};

use super::eye::EyeInfo;
use super::macrochain::MacrochainInfo;
use super::InternalError;

/// Which of the two false-eye passes to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FalseEyePass {
    /// Before eye values exist; produces `is_false_eye`.
    Provisional,
    /// After valuation; produces `is_unscorable_false_eye`.
    Scored,
}

/// The read-only tables the search walks.
pub struct EyeGraph<'a> {
    pub position: &'a Position,
    pub eye_ids: &'a Grid<Option<usize>>,
    pub macrochain_ids: &'a Grid<Option<usize>>,
    pub macrochains: &'a [MacrochainInfo],
}

/// Macrochains connected to a start macrochain through qualifying eyes.
#[derive(Debug, Default)]
struct Component {
    macrochains: BTreeSet<usize>,
    value: u32,
}

impl EyeGraph<'_> {
    /// Depth-first walk from `start` that never crosses `excluded` or a
    /// loose eye.
    fn component(&self, start: usize, excluded: usize, eyes: &[EyeInfo]) -> Component {
        let mut component = Component::default();
        let mut seen_eyes = BTreeSet::new();
        let mut stack = vec![start];
        component.macrochains.insert(start);

        while let Some(m) = stack.pop() {
            for &eye in self.macrochains[m].eye_neighbors_from.keys() {
                if eye == excluded || eyes[eye].is_loose || !seen_eyes.insert(eye) {
                    continue;
                }
                component.value += u32::from(eyes[eye].value);
                for &next in eyes[eye].macrochain_neighbors_from.keys() {
                    if component.macrochains.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }

        component
    }

    /// Stones of a macrochain of the eye's color next to `loc`, one entry per
    /// neighbouring stone.
    fn sides(&self, loc: Loc, eye: &EyeInfo) -> Vec<usize> {
        self.position
            .stones()
            .neighbors(loc)
            .filter_map(|n| self.macrochain_ids[n])
            .filter(|&m| self.macrochains[m].color == eye.color)
            .collect()
    }

    fn same_eye_neighbors(&self, loc: Loc, eye: usize) -> usize {
        self.position
            .stones()
            .neighbors(loc)
            .filter(|&n| self.eye_ids[n] == Some(eye))
            .count()
    }

    fn check_links(&self, eye: &EyeInfo) -> Result<(), InternalError> {
        for &m in eye.macrochain_neighbors_from.keys() {
            if !self.macrochains[m].eye_neighbors_from.contains_key(&eye.id) {
                return Err(InternalError::MissingEyeLink { macrochain: m, eye: eye.id });
            }
        }
        Ok(())
    }
}

/// Marks the false-eye points of every eye for the given pass.
pub fn mark_false_eyes(graph: &EyeGraph<'_>, eyes: &[EyeInfo], pass: FalseEyePass) -> Result<Grid<bool>, InternalError> {
    let position = graph.position;
    let mut marked = Grid::new(position.width(), position.height(), false);

    for eye in eyes {
        graph.check_links(eye)?;

        let boundary: BTreeSet<Loc> = eye.macrochain_neighbors_from.values().flatten().copied().collect();
        for &loc in &boundary {
            if graph.same_eye_neighbors(loc, eye.id) > 1 {
                continue;
            }
            let sides = graph.sides(loc, eye);
            if sides.len() <= 1 {
                continue;
            }

            let origin = graph.component(sides[0], eye.id, eyes);
            let origin_alive = origin.value >= 2;
            let reached = sides
                .iter()
                .filter(|&&side| {
                    origin.macrochains.contains(&side)
                        || (pass == FalseEyePass::Scored
                            && origin_alive
                            && graph.component(side, eye.id, eyes).value >= 2)
                })
                .count();

            if reached < sides.len() {
                marked[loc] = true;
            }
        }

        if pass == FalseEyePass::Scored {
            let extra: Vec<Loc> = eye
                .potential_points
                .iter()
                .filter(|&&loc| marked[loc] && position.is_dead(loc))
                .flat_map(|&loc| position.stones().neighbors(loc))
                .filter(|&n| graph.eye_ids[n] == Some(eye.id) && position.is_empty_point(n))
                .collect();
            for loc in extra {
                marked[loc] = true;
            }
        }
    }

    Ok(marked)
}
