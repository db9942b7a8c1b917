//! Macrochains: live chains of one color that live or die together.
//!
//! Chains are merged when they are connected through contested space (points
//! with no region) that is not blocked against their color. Space inside a
//! region is left alone; it is where eyes are found.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::{Color, Grid, Loc, Position, ALL_COLORS};

use super::chain::ChainInfo;
use super::reach::passable;
use super::InternalError;

/// A set of live same-color chains scored as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacrochainInfo {
    pub id: usize,
    /// Region of the chain that seeded the macrochain.
    pub region: usize,
    pub color: Color,
    pub points: Vec<Loc>,
    pub chains: BTreeSet<usize>,
    /// For each adjacent eye, the eye points that touch this macrochain.
    pub eye_neighbors_from: BTreeMap<usize, BTreeSet<Loc>>,
}

/// Groups live chains into macrochains. Only live stones get an id.
pub fn mark_macrochains(
    position: &Position,
    blocks: &Grid<Option<Color>>,
    region_ids: &Grid<Option<usize>>,
    chain_ids: &Grid<usize>,
    chains: &[ChainInfo],
) -> Result<(Grid<Option<usize>>, Vec<MacrochainInfo>), InternalError> {
    let grid = position.stones();
    let mut macrochain_ids = Grid::new(position.width(), position.height(), None);
    let mut macrochains = Vec::new();
    let mut stack = Vec::new();

    for pla in ALL_COLORS {
        let mut visited = Grid::new(position.width(), position.height(), false);
        let mut handled = vec![false; chains.len()];

        for chain in chains {
            if handled[chain.id] || !chain.is_live(pla) {
                continue;
            }
            let region = chain.region.ok_or(InternalError::ChainWithoutRegion { chain: chain.id })?;

            let id = macrochains.len();
            let mut points = Vec::new();
            let mut members = BTreeSet::new();

            let seed = chain.points[0];
            visited[seed] = true;
            stack.push(seed);
            while let Some(cur) = stack.pop() {
                if position.is_live(cur, pla) {
                    macrochain_ids[cur] = Some(id);
                    points.push(cur);
                    handled[chain_ids[cur]] = true;
                    members.insert(chain_ids[cur]);
                }
                for next in grid.neighbors(cur) {
                    if visited[next] {
                        continue;
                    }
                    let joins = position.is_live(next, pla)
                        || (region_ids[next].is_none() && passable(position, Some(blocks), next, pla));
                    if joins {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }

            points.sort_unstable();
            log::trace!("macrochain {} ({:?}): {} chains, {} stones", id, pla, members.len(), points.len());
            macrochains.push(MacrochainInfo {
                id,
                region,
                color: pla,
                points,
                chains: members,
                eye_neighbors_from: BTreeMap::new(),
            });
        }
    }

    Ok((macrochain_ids, macrochains))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::blocks::mark_connection_blocks;
    use crate::analysis::chain::mark_chains;
    use crate::analysis::reach::mark_reachability;
    use crate::analysis::region::mark_regions;
    use crate::protocol::diagram::parse_diagram;

    fn macrochains_of(diagram: &str) -> (Position, Grid<Option<usize>>, Vec<MacrochainInfo>) {
        let pos = parse_diagram(diagram).unwrap();
        let blocks = mark_connection_blocks(&pos);
        let reach = mark_reachability(&pos, Some(&blocks));
        let (region_ids, _) = mark_regions(&pos, &blocks, &reach);
        let (chain_ids, chains) = mark_chains(&pos, &region_ids);
        let (ids, macrochains) = mark_macrochains(&pos, &blocks, &region_ids, &chain_ids, &chains).unwrap();
        (pos, ids, macrochains)
    }

    #[test]
    fn chains_sharing_dame_merge() {
        // Both black stones touch the contested middle column.
        let (pos, ids, macrochains) = macrochains_of(
            ".X.O.\n\
             .....\n\
             .X.O.",
        );
        let black: Vec<&MacrochainInfo> = macrochains.iter().filter(|m| m.color == Color::Black).collect();
        assert_eq!(black.len(), 1);
        assert_eq!(black[0].chains.len(), 2);
        assert_eq!(ids[pos.stones().loc(1, 0)], ids[pos.stones().loc(1, 2)]);
    }

    #[test]
    fn chains_separated_by_own_territory_stay_apart() {
        // The empty column between the black stones is black's region.
        let (_, _, macrochains) = macrochains_of(
            "X.X\n\
             X.X\n\
             X.X",
        );
        assert_eq!(macrochains.len(), 2);
        assert!(macrochains.iter().all(|m| m.chains.len() == 1 && m.points.len() == 3));
    }

    #[test]
    fn dead_stones_get_no_macrochain() {
        let (pos, ids, macrochains) = macrochains_of(
            "X.\n\
             .o",
        );
        assert_eq!(macrochains.len(), 1);
        assert_eq!(ids[pos.stones().loc(1, 1)], None);
    }

    #[test]
    fn live_chain_without_region_is_an_internal_error() {
        let pos = parse_diagram("X.").unwrap();
        let blocks = Grid::new(2, 1, None);
        let region_ids = Grid::new(2, 1, None);
        let (chain_ids, chains) = mark_chains(&pos, &region_ids);
        let err = mark_macrochains(&pos, &blocks, &region_ids, &chain_ids, &chains).unwrap_err();
        assert_eq!(err, InternalError::ChainWithoutRegion { chain: 0 });
    }
}
