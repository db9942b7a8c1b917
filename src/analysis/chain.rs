//! Chains: maximal orthogonally connected runs of identical point state.
//!
//! Empty points form chains too, so every point has exactly one chain id.

use std::collections::BTreeSet;

use crate::board::{Color, Grid, Loc, Position};

/// One chain of points sharing `(stone, dead)` state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
    pub id: usize,
    /// `None` when the points carry different region ids.
    pub region: Option<usize>,
    pub stone: Option<Color>,
    pub is_dead: bool,
    pub points: Vec<Loc>,
    /// Ids of orthogonally adjacent chains.
    pub neighbors: BTreeSet<usize>,
    /// Points adjacent to the chain but not part of it.
    pub adjacents: Vec<Loc>,
    /// The physically empty adjacent points.
    pub liberties: Vec<Loc>,
}

impl ChainInfo {
    /// True for a stone chain of `color` not marked dead.
    pub fn is_live(&self, color: Color) -> bool {
        self.stone == Some(color) && !self.is_dead
    }
}

/// Partitions the board into chains.
pub fn mark_chains(position: &Position, region_ids: &Grid<Option<usize>>) -> (Grid<usize>, Vec<ChainInfo>) {
    let grid = position.stones();
    let state = |loc: Loc| (position.stone(loc), position.is_dead(loc));

    let mut chain_ids = Grid::new(position.width(), position.height(), usize::MAX);
    let mut chains = Vec::new();
    let mut stack = Vec::new();

    for seed in grid.locs() {
        if chain_ids[seed] != usize::MAX {
            continue;
        }
        let id = chains.len();
        let seed_state = state(seed);
        let mut points = Vec::new();
        let mut region = region_ids[seed];
        let mut adjacents = BTreeSet::new();

        chain_ids[seed] = id;
        stack.push(seed);
        while let Some(cur) = stack.pop() {
            points.push(cur);
            if region_ids[cur] != region {
                region = None;
            }
            for next in grid.neighbors(cur) {
                if state(next) != seed_state {
                    adjacents.insert(next);
                } else if chain_ids[next] == usize::MAX {
                    chain_ids[next] = id;
                    stack.push(next);
                }
            }
        }

        points.sort_unstable();
        let adjacents: Vec<Loc> = adjacents.into_iter().collect();
        let liberties = adjacents.iter().copied().filter(|&loc| position.is_empty_point(loc)).collect();
        chains.push(ChainInfo {
            id,
            region,
            stone: seed_state.0,
            is_dead: seed_state.1,
            points,
            neighbors: BTreeSet::new(),
            adjacents,
            liberties,
        });
    }

    for chain in chains.iter_mut() {
        chain.neighbors = chain.adjacents.iter().map(|&loc| chain_ids[loc]).collect();
    }

    (chain_ids, chains)
}
