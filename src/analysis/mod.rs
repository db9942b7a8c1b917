//! Territory, seki and eye analysis.
//!
//! A fixed sequence of graph passes over one `Position`. Each pass fills a
//! per-point id grid and an id-indexed arena that later passes read:
//!
//! 1. connection blocks ([`blocks`])
//! 2. strict and blocked reachability ([`reach`])
//! 3. regions ([`region`])
//! 4. chains ([`chain`])
//! 5. macrochains ([`macrochain`])
//! 6. potential eyes ([`eye`])
//! 7. false eyes ([`false_eye`]), run before and after valuation
//! 8. eye values ([`eye_value`])
//! 9. per-point classification ([`assemble`])

pub mod assemble;
pub mod blocks;
pub mod chain;
pub mod eye;
pub mod eye_value;
pub mod false_eye;
pub mod macrochain;
pub mod reach;
pub mod region;

use thiserror::Error;

use crate::board::{Color, Grid, Position};

pub use assemble::{mark_scoring, LocScore};
pub use chain::ChainInfo;
pub use eye::EyeInfo;
pub use false_eye::FalseEyePass;
pub use macrochain::MacrochainInfo;
pub use reach::Reach;
pub use region::RegionInfo;

/// An invariant of the analysis itself was violated. These indicate a bug,
/// not bad input, and abort the computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InternalError {
    #[error("live chain {chain} does not resolve to exactly one region")]
    ChainWithoutRegion { chain: usize },

    #[error("macrochain {macrochain} has no link back to adjacent eye {eye}")]
    MissingEyeLink { macrochain: usize, eye: usize },
}

/// Everything the passes computed for one position.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub blocks: Grid<Option<Color>>,
    pub strict_reach: Reach,
    pub reach: Reach,
    pub region_ids: Grid<Option<usize>>,
    pub regions: Vec<RegionInfo>,
    pub chain_ids: Grid<usize>,
    pub chains: Vec<ChainInfo>,
    pub macrochain_ids: Grid<Option<usize>>,
    pub macrochains: Vec<MacrochainInfo>,
    pub eye_ids: Grid<Option<usize>>,
    pub eyes: Vec<EyeInfo>,
    pub is_false_eye: Grid<bool>,
    pub is_unscorable_false_eye: Grid<bool>,
}

impl Analysis {
    /// Sum of the values of the eyes belonging to `region`.
    pub fn region_eye_value(&self, region: usize) -> u32 {
        self.regions[region]
            .eyes
            .iter()
            .map(|&eye| u32::from(self.eyes[eye].value))
            .sum()
    }

    /// True if the region is scored as seki: it borders the opponent and its
    /// eyes are not worth two.
    pub fn is_seki_region(&self, region: usize) -> bool {
        self.regions[region].borders_opponent && self.region_eye_value(region) <= 1
    }
}

/// Runs every analysis pass over `position`.
pub fn analyze(position: &Position) -> Result<Analysis, InternalError> {
    let blocks = blocks::mark_connection_blocks(position);
    let strict_reach = reach::mark_reachability(position, None);
    let reach = reach::mark_reachability(position, Some(&blocks));

    let (region_ids, mut regions) = region::mark_regions(position, &blocks, &reach);
    let (chain_ids, chains) = chain::mark_chains(position, &region_ids);
    let (macrochain_ids, mut macrochains) =
        macrochain::mark_macrochains(position, &blocks, &region_ids, &chain_ids, &chains)?;
    let (eye_ids, mut eyes) = eye::mark_potential_eyes(
        position,
        &strict_reach,
        &region_ids,
        &mut regions,
        &macrochain_ids,
        &mut macrochains,
    );

    let ctx = false_eye::EyeGraph {
        position,
        eye_ids: &eye_ids,
        macrochain_ids: &macrochain_ids,
        macrochains: &macrochains,
    };
    let is_false_eye = false_eye::mark_false_eyes(&ctx, &eyes, FalseEyePass::Provisional)?;
    eye_value::mark_eye_values(position, &eye_ids, &macrochain_ids, &macrochains, &is_false_eye, &mut eyes);
    let is_unscorable_false_eye = false_eye::mark_false_eyes(&ctx, &eyes, FalseEyePass::Scored)?;

    log::debug!(
        "analyzed {}x{}: {} regions, {} chains, {} macrochains, {} eyes",
        position.width(),
        position.height(),
        regions.len(),
        chains.len(),
        macrochains.len(),
        eyes.len()
    );

    Ok(Analysis {
        blocks,
        strict_reach,
        reach,
        region_ids,
        regions,
        chain_ids,
        chains,
        macrochain_ids,
        macrochains,
        eye_ids,
        eyes,
        is_false_eye,
        is_unscorable_false_eye,
    })
}
