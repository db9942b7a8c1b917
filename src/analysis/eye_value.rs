//! Eye valuation.
//!
//! Each potential eye is worth 0, 1 or 2 eyes to its owner. The value is the
//! best of a handful of shape rules. Most of them look at how many defender
//! moves it takes to keep the attacker out of a point (`moves_to_block`):
//! zero means the point is already sealed, one means the defender can seal it
//! in reply, and a thousand or more means an attacker stone next to a false
//! eye that can never be sealed.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::{Color, Grid, Loc, Position};

use super::eye::EyeInfo;
use super::macrochain::MacrochainInfo;

/// Cost assigned to an attacker stone that touches a false eye point.
const UNBLOCKABLE: u32 = 1000;

/// Fills in `real_points` and `value` for every eye.
pub fn mark_eye_values(
    position: &Position,
    eye_ids: &Grid<Option<usize>>,
    macrochain_ids: &Grid<Option<usize>>,
    macrochains: &[MacrochainInfo],
    is_false_eye: &Grid<bool>,
    eyes: &mut [EyeInfo],
) {
    for eye in eyes.iter_mut() {
        eye.real_points = eye
            .potential_points
            .iter()
            .copied()
            .filter(|&loc| !is_false_eye[loc])
            .collect();

        let valuator = Valuator::new(position, eye_ids, macrochain_ids, macrochains, is_false_eye, eye);
        eye.value = valuator.value();
        log::trace!(
            "eye {} ({:?}): {} potential, {} real, value {}",
            eye.id,
            eye.color,
            eye.potential_points.len(),
            eye.real_points.len(),
            eye.value
        );
    }
}

struct Valuator<'a> {
    position: &'a Position,
    eye_ids: &'a Grid<Option<usize>>,
    macrochain_ids: &'a Grid<Option<usize>>,
    macrochains: &'a [MacrochainInfo],
    is_false_eye: &'a Grid<bool>,
    eye: &'a EyeInfo,
    real: BTreeSet<Loc>,
    block: BTreeMap<Loc, u32>,
}

impl<'a> Valuator<'a> {
    fn new(
        position: &'a Position,
        eye_ids: &'a Grid<Option<usize>>,
        macrochain_ids: &'a Grid<Option<usize>>,
        macrochains: &'a [MacrochainInfo],
        is_false_eye: &'a Grid<bool>,
        eye: &'a EyeInfo,
    ) -> Self {
        let mut valuator = Valuator {
            position,
            eye_ids,
            macrochain_ids,
            macrochains,
            is_false_eye,
            eye,
            real: eye.real_points.iter().copied().collect(),
            block: BTreeMap::new(),
        };
        valuator.block = valuator.real.iter().map(|&loc| (loc, valuator.moves_to_block(loc))).collect();
        valuator
    }

    /// The best rule value. The rules take a max capped at 2, so they run
    /// cheapest first and the flood-based ones only see eyes still below 2.
    fn value(&self) -> u8 {
        let rules: [fn(&Self) -> u8; 7] = [
            Self::single_point,
            Self::dead_stones,
            Self::shape_size,
            Self::branching,
            Self::split_moves,
            Self::paired_branch_points,
            Self::dead_stone_removal,
        ];

        let mut best = 0;
        for rule in rules {
            best = best.max(rule(self));
            if best >= 2 {
                return 2;
            }
        }
        best
    }

    fn neighbors(&self, loc: Loc) -> impl Iterator<Item = Loc> + '_ {
        self.position.stones().neighbors(loc)
    }

    fn defender(&self) -> Color {
        self.eye.color
    }

    fn in_eye(&self, loc: Loc) -> bool {
        self.eye_ids[loc] == Some(self.eye.id)
    }

    fn is_attacker_stone(&self, loc: Loc) -> bool {
        self.position.stone(loc) == Some(self.defender().opposite())
    }

    fn is_defender_wall(&self, loc: Loc) -> bool {
        matches!(self.macrochain_ids[loc], Some(m) if self.macrochains[m].color == self.defender())
    }

    /// An attacker stone inside the eye with a false eye point next to it.
    fn is_unblockable(&self, loc: Loc) -> bool {
        self.in_eye(loc) && self.is_attacker_stone(loc) && self.neighbors(loc).any(|n| self.is_false_eye[n])
    }

    fn moves_to_block(&self, loc: Loc) -> u32 {
        let mut cost = 0;
        if self.is_unblockable(loc) {
            cost += UNBLOCKABLE;
        }
        for n in self.neighbors(loc) {
            if self.is_unblockable(n) {
                cost += UNBLOCKABLE;
            }
            if self.in_eye(n) {
                if self.is_false_eye[n] && self.position.is_empty_point(n) {
                    cost += 1;
                }
            } else if !self.is_defender_wall(n) {
                cost += 1;
            }
        }
        cost
    }

    fn block_of(&self, loc: Loc) -> u32 {
        self.block.get(&loc).copied().unwrap_or(UNBLOCKABLE)
    }

    /// An empty real point the defender could play on without it being
    /// immediate suicide.
    fn is_pseudo_legal(&self, loc: Loc) -> bool {
        self.position.is_empty_point(loc)
            && self
                .neighbors(loc)
                .any(|n| self.position.is_empty_point(n) || self.position.is_live(n, self.defender()))
    }

    /// Connected pieces of `points`.
    fn pieces(&self, points: &BTreeSet<Loc>) -> Vec<Vec<Loc>> {
        let mut seen = BTreeSet::new();
        let mut pieces = Vec::new();
        let mut stack = Vec::new();

        for &seed in points {
            if !seen.insert(seed) {
                continue;
            }
            let mut piece = Vec::new();
            stack.push(seed);
            while let Some(cur) = stack.pop() {
                piece.push(cur);
                for n in self.neighbors(cur) {
                    if points.contains(&n) && seen.insert(n) {
                        stack.push(n);
                    }
                }
            }
            pieces.push(piece);
        }

        pieces
    }

    fn neighbors_in(&self, loc: Loc, points: &BTreeSet<Loc>) -> Vec<Loc> {
        self.neighbors(loc).filter(|n| points.contains(n)).collect()
    }

    /// Points of `points` whose removal splits their piece, found in one
    /// depth-first pass (Tarjan's articulation points).
    fn cut_points(&self, points: &BTreeSet<Loc>) -> BTreeSet<Loc> {
        const UNSEEN: usize = usize::MAX;
        let mut disc = vec![UNSEEN; self.position.stones().len()];
        let mut low = vec![0; disc.len()];
        let mut cuts = BTreeSet::new();
        let mut time = 0;

        for &root in points {
            if disc[root] != UNSEEN {
                continue;
            }
            disc[root] = time;
            low[root] = time;
            time += 1;
            let mut root_children = 0;
            // (point, tree parent, neighbours not yet explored)
            let mut stack = vec![(root, root, self.neighbors_in(root, points))];

            while let Some(frame) = stack.last_mut() {
                let (v, parent) = (frame.0, frame.1);
                match frame.2.pop() {
                    Some(w) if w == parent => {}
                    Some(w) if disc[w] != UNSEEN => low[v] = low[v].min(disc[w]),
                    Some(w) => {
                        disc[w] = time;
                        low[w] = time;
                        time += 1;
                        if v == root {
                            root_children += 1;
                        }
                        stack.push((w, v, self.neighbors_in(w, points)));
                    }
                    None => {
                        stack.pop();
                        if v != root {
                            low[parent] = low[parent].min(low[v]);
                            if parent != root && low[v] >= disc[parent] {
                                cuts.insert(parent);
                            }
                        }
                    }
                }
            }

            if root_children >= 2 {
                cuts.insert(root);
            }
        }

        cuts
    }

    fn real_without(&self, removed: &[Loc]) -> BTreeSet<Loc> {
        self.real.iter().copied().filter(|loc| !removed.contains(loc)).collect()
    }

    fn count_pieces_with(&self, pieces: &[Vec<Loc>], max_block: u32, needed: usize) -> usize {
        pieces
            .iter()
            .filter(|piece| piece.iter().filter(|&&loc| self.block_of(loc) <= max_block).count() >= needed)
            .count()
    }

    fn real_degree(&self, loc: Loc, set: &BTreeSet<Loc>) -> usize {
        self.neighbors(loc).filter(|n| set.contains(n)).count()
    }

    fn single_point(&self) -> u8 {
        u8::from(self.block.values().any(|&b| b <= 1))
    }

    /// A defender move that cuts the eye into separately sealed pieces.
    fn split_moves(&self) -> u8 {
        // On a connected eye only a cut point can leave two pieces.
        let connected = self.pieces(&self.real).len() <= 1;
        let cuts = self.cut_points(&self.real);
        let mut best = 0;
        for &m in &self.real {
            if !self.is_pseudo_legal(m) || (connected && !cuts.contains(&m)) {
                continue;
            }
            let pieces = self.pieces(&self.real_without(&[m]));
            if pieces.len() < 2 {
                continue;
            }
            let capturable = self
                .neighbors(m)
                .filter(|&n| self.is_attacker_stone(n) && self.neighbors(n).any(|f| self.is_false_eye[f]))
                .count();
            let max_block = if capturable == 1 { 1 } else { 0 };
            let count = self.count_pieces_with(&pieces, max_block, 1);
            best = best.max(count.min(2) as u8);
            if best >= 2 {
                break;
            }
        }
        best
    }

    fn dead_stones(&self) -> u8 {
        let dead = self
            .eye
            .potential_points
            .iter()
            .filter(|&&loc| self.position.is_dead_stone(loc, self.defender().opposite()))
            .count();
        match dead {
            8.. => 2,
            5.. => 1,
            _ => 0,
        }
    }

    fn shape_size(&self) -> u8 {
        let sealed = self.block.values().filter(|&&b| b <= 1).count() as isize;
        let crowding = self
            .eye
            .potential_points
            .iter()
            .filter(|&&loc| {
                self.is_attacker_stone(loc) && self.neighbors(loc).filter(|&n| self.in_eye(n)).count() >= 2
            })
            .count() as isize;
        if sealed - crowding >= 6 {
            2
        } else {
            0
        }
    }

    fn branching(&self) -> u8 {
        let degrees: Vec<usize> = self
            .real
            .iter()
            .filter(|&&loc| self.position.is_empty_point(loc))
            .map(|&loc| self.real_degree(loc, &self.real))
            .collect();
        let fours = degrees.iter().filter(|&&d| d >= 4).count();
        let threes = degrees.iter().filter(|&&d| d >= 3).count();
        if fours + threes >= 6 {
            2
        } else {
            0
        }
    }

    fn paired_branch_points(&self) -> u8 {
        let attacker = self.defender().opposite();
        let candidates: Vec<Loc> = self
            .real
            .iter()
            .copied()
            .filter(|&loc| {
                self.real_degree(loc, &self.real) == 4
                    && self.block_of(loc) <= 1
                    && (self.position.is_empty_point(loc) || self.position.is_dead_stone(loc, attacker))
            })
            .collect();

        for &p1 in &candidates {
            if !self.is_pseudo_legal(p1) {
                continue;
            }
            for &p2 in &candidates {
                if p2 == p1 {
                    continue;
                }
                let pieces = self.pieces(&self.real_without(&[p1, p2]));
                let safe = self.count_pieces_with(&pieces, 0, 1);
                let doubly_safe = self.count_pieces_with(&pieces, 0, 2);
                let needed = if self.position.is_empty_point(p2) { 2 } else { 1 };
                if safe >= 2 && doubly_safe >= needed {
                    return 2;
                }
            }
        }
        0
    }

    /// Whether the eye still makes two eyes after the attacker's dead or
    /// unblockable stones are taken off one at a time.
    fn dead_stone_removal(&self) -> u8 {
        let attacker = self.defender().opposite();
        let mut unsettled: BTreeSet<Loc> = self
            .eye
            .potential_points
            .iter()
            .copied()
            .filter(|&loc| self.position.is_dead_stone(loc, attacker))
            .collect();
        unsettled.extend(self.block.iter().filter(|(_, &b)| b >= UNBLOCKABLE).map(|(&loc, _)| loc));
        if unsettled.is_empty() {
            return 0;
        }

        for &u in &unsettled {
            let shape: BTreeSet<Loc> = self
                .real
                .iter()
                .copied()
                .filter(|&loc| loc == u || !unsettled.contains(&loc))
                .collect();
            if self.removal_score(u, &shape) < 2 {
                return 0;
            }
        }
        2
    }

    fn removal_score(&self, u: Loc, shape: &BTreeSet<Loc>) -> i32 {
        let pieces = self.pieces(shape).len();
        let cuts = self.cut_points(shape);
        let branches = shape
            .iter()
            .filter(|&&loc| self.real_degree(loc, shape) >= 3 || cuts.contains(&loc))
            .count();

        let mut score = pieces as i32 + branches.div_ceil(2) as i32;
        if shape.len() >= 7 {
            score += 1;
        }
        if self.real_degree(u, shape) == 1 {
            score -= 1;
        }
        score
    }
}
