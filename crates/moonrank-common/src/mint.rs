//! Ranked asset records.

use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// Per-trait contribution to an asset's rarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankInfo {
    /// Trait category (trimmed)
    pub attribute: String,
    /// Trait value (trimmed, empty for injected placeholders)
    pub value: String,
    /// 100 · times_seen / total_seen
    #[serde(rename = "value_perc")]
    pub value_percentage: f64,
    /// Number of assets carrying this (category, value) pair
    pub times_seen: usize,
    /// Number of assets in the collection
    pub total_seen: usize,
}

/// Contribution of a trait whose category was filtered out of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredRankInfo {
    #[serde(flatten)]
    pub info: RankInfo,
    /// Category carries no display value either (auto-filtered or flagged)
    pub frivolous: bool,
}

/// An asset as it moves through the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mint {
    /// Opaque stable identifier, derived outside the ranker
    #[serde(rename = "mint")]
    pub id: String,
    pub metadata: Metadata,
    pub rank: usize,
    pub absolute_rarity: f64,
    pub filtered_rarity: f64,
    pub rank_explain: Vec<RankInfo>,
    pub filtered_rank_explain: Vec<FilteredRankInfo>,
}

impl Mint {
    /// An unranked asset; scores are filled in by the scorer.
    pub fn new(id: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            id: id.into(),
            metadata,
            rank: 0,
            absolute_rarity: 1.0,
            filtered_rarity: 1.0,
            rank_explain: Vec::new(),
            filtered_rank_explain: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
