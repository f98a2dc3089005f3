//! Per-asset rarity scores.
//!
//! absolute_rarity = Π times_seen / total over every attribute
//! filtered_rarity = the same product over non-filtered categories only
//!
//! Lower is rarer. Every asset carries at least one factor per category of
//! the shape (placeholders included), so both products stay in (0, 1].

use std::cmp::Ordering;
use std::collections::HashSet;

use moonrank_common::{FilteredRankInfo, Mint, RankInfo};
use rayon::prelude::*;
use tracing::info;

use crate::aggregate::RarityIndex;
use crate::config::RankConfig;
use crate::natural::natural_cmp;

/// Score every asset against the collection-wide index.
pub fn score_mints(mints: Vec<Mint>, index: &RarityIndex, config: &RankConfig) -> Vec<Mint> {
    let filtered = config.filtered_attributes();
    info!("score_mints: filtered attributes = {filtered:?}");

    let filtered: HashSet<String> = filtered.into_iter().collect();
    let total = mints.len();

    mints
        .into_par_iter()
        .map(|mint| score_mint(mint, index, total, &filtered, config))
        .collect()
}

/// Compute scores and explain lists for one asset.
///
/// Attributes are stably sorted by category first, so the explain lists and
/// the output metadata do not depend on source ordering.
pub fn score_mint(
    mut mint: Mint,
    index: &RarityIndex,
    total: usize,
    filtered: &HashSet<String>,
    config: &RankConfig,
) -> Mint {
    mint.metadata
        .attributes
        .sort_by(|a, b| a.trait_type.cmp(&b.trait_type));

    let mut absolute_rarity = 1.0f64;
    let mut filtered_rarity = 1.0f64;
    let mut rank_explain = Vec::new();
    let mut filtered_explain = Vec::new();

    for attr in &mint.metadata.attributes {
        let trait_type = attr.trait_type.trim();
        let value = attr.value.trim();
        let times_seen = index.times_seen(trait_type, value);

        let attr_r = times_seen as f64 / total as f64;
        let info = RankInfo {
            attribute: trait_type.to_string(),
            value: value.to_string(),
            value_percentage: attr_r * 100.0,
            times_seen,
            total_seen: total,
        };

        absolute_rarity *= attr_r;
        if filtered.contains(trait_type) {
            filtered_explain.push(FilteredRankInfo {
                info,
                frivolous: config.is_frivolous(trait_type),
            });
            continue;
        }

        filtered_rarity *= attr_r;
        rank_explain.push(info);
    }

    mint.rank_explain = sort_rank_explain(rank_explain);
    mint.filtered_rank_explain = sort_filtered_rank_explain(filtered_explain, config.include_frivolous);
    mint.absolute_rarity = absolute_rarity;
    mint.filtered_rarity = filtered_rarity;
    mint
}

/// Rarest first, then category and value in natural order.
pub fn rank_info_cmp(x: &RankInfo, y: &RankInfo) -> Ordering {
    x.times_seen.cmp(&y.times_seen).then_with(|| {
        if x.attribute == y.attribute {
            natural_cmp(&x.value, &y.value)
        } else {
            natural_cmp(&x.attribute, &y.attribute)
        }
    })
}

pub fn sort_rank_explain(mut explain: Vec<RankInfo>) -> Vec<RankInfo> {
    explain.sort_by(rank_info_cmp);
    explain
}

/// Sort filtered records; frivolous ones are dropped unless kept for display.
pub fn sort_filtered_rank_explain(
    mut explain: Vec<FilteredRankInfo>,
    include_frivolous: bool,
) -> Vec<FilteredRankInfo> {
    if !include_frivolous {
        explain.retain(|f| !f.frivolous);
    }
    explain.sort_by(|x, y| rank_info_cmp(&x.info, &y.info));
    explain
}
