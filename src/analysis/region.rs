//! Region segmentation.
//!
//! A region is a maximal connected set of points reached (under blocked
//! reachability) by one color and not the other. The flood also records the
//! contested points it runs into, so a region knows its dame boundary.

use crate::board::{Color, Grid, Loc, Position, ALL_COLORS};

use super::reach::{passable, Reach};

/// One region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInfo {
    pub id: usize,
    pub color: Color,
    /// Exclusive points followed by the contested boundary points touched.
    pub points: Vec<Loc>,
    /// Eyes found inside the region, filled in by eye detection.
    pub eyes: Vec<usize>,
    /// The flood touched a live opponent stone or a point the opponent also
    /// reaches.
    pub borders_opponent: bool,
}

/// Assigns region ids. Points with no region id are contested or unreached.
pub fn mark_regions(
    position: &Position,
    blocks: &Grid<Option<Color>>,
    reach: &Reach,
) -> (Grid<Option<usize>>, Vec<RegionInfo>) {
    let grid = position.stones();
    let mut region_ids: Grid<Option<usize>> = Grid::new(position.width(), position.height(), None);
    let mut regions = Vec::new();
    // Generation stamp per point, so the visited set need not be cleared.
    let mut visited = Grid::new(position.width(), position.height(), usize::MAX);
    let mut stack = Vec::new();

    for seed in grid.locs() {
        for pla in ALL_COLORS {
            if region_ids[seed].is_some() || !reach.exclusive(pla, seed) {
                continue;
            }

            let id = regions.len();
            let mut exclusive = Vec::new();
            let mut boundary = Vec::new();
            let mut borders_opponent = false;

            visited[seed] = id;
            stack.push(seed);
            while let Some(cur) = stack.pop() {
                if !reach.exclusive(pla, cur) {
                    // Reached by pla through `cur`'s neighbour, so the
                    // opponent reaches it too.
                    borders_opponent = true;
                    boundary.push(cur);
                    continue;
                }
                region_ids[cur] = Some(id);
                exclusive.push(cur);

                for next in grid.neighbors(cur) {
                    if position.is_live(next, pla.opposite()) {
                        borders_opponent = true;
                        continue;
                    }
                    if visited[next] == id || !passable(position, Some(blocks), next, pla) {
                        continue;
                    }
                    visited[next] = id;
                    stack.push(next);
                }
            }

            exclusive.sort_unstable();
            boundary.sort_unstable();
            let mut points = exclusive;
            points.extend(boundary);
            regions.push(RegionInfo {
                id,
                color: pla,
                points,
                eyes: Vec::new(),
                borders_opponent,
            });
        }
    }

    (region_ids, regions)
}
