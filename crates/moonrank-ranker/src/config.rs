//! Ranking configuration.
//!
//! Everything that changes how a collection is scored travels in a
//! `RankConfig` value handed to the pipeline; there is no global state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Categories that never contribute to the filtered rarity.
/// Matching is case-sensitive against this literal list.
pub const AUTO_FILTERED_ATTRIBUTES: &[&str] =
    &["sequence", "generation", "Sequence", "Collection", "Rarity Rank"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Caller-designated categories excluded from the filtered rarity
    #[serde(default)]
    pub filtered: Vec<String>,

    /// Filtered categories that are also hidden from `filtered_rank_explain`
    #[serde(default)]
    pub frivolous: Vec<String>,

    /// Keep frivolous records in `filtered_rank_explain`
    #[serde(default)]
    pub include_frivolous: bool,

    /// Category renames applied before ranking
    #[serde(default)]
    pub trait_map: BTreeMap<String, String>,

    /// Per category, value replacements applied before ranking
    #[serde(default)]
    pub value_map: BTreeMap<String, BTreeMap<String, String>>,
}

impl RankConfig {
    pub fn with_filtered<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filtered.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_frivolous<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frivolous.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_include_frivolous(mut self, include: bool) -> Self {
        self.include_frivolous = include;
        self
    }

    pub fn with_trait_map(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.trait_map.insert(from.into(), to.into());
        self
    }

    pub fn with_value_map(
        mut self,
        trait_type: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.value_map
            .entry(trait_type.into())
            .or_default()
            .insert(from.into(), to.into());
        self
    }

    /// Caller-designated categories followed by the auto-filtered ones,
    /// without duplicates.
    pub fn filtered_attributes(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.filtered.len() + AUTO_FILTERED_ATTRIBUTES.len());
        let extra = AUTO_FILTERED_ATTRIBUTES.iter().map(|s| (*s).to_string());
        for name in self.filtered.iter().cloned().chain(extra) {
            if !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }

    pub fn is_frivolous(&self, trait_type: &str) -> bool {
        AUTO_FILTERED_ATTRIBUTES.contains(&trait_type) || self.frivolous.iter().any(|f| f == trait_type)
    }
}
