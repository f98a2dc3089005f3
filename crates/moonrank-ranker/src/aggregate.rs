//! Global (category, value) frequency index.

use std::collections::{HashMap, HashSet};

use moonrank_common::Mint;

/// Category → value → identifiers of the assets carrying that value.
/// Keys are trimmed; comparison is exact (no case folding).
#[derive(Debug, Clone, Default)]
pub struct RarityIndex {
    traits: HashMap<String, HashMap<String, HashSet<String>>>,
}

impl RarityIndex {
    /// Number of distinct assets carrying `value` in `trait_type`.
    pub fn times_seen(&self, trait_type: &str, value: &str) -> usize {
        self.traits
            .get(trait_type.trim())
            .and_then(|values| values.get(value.trim()))
            .map_or(0, HashSet::len)
    }

    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    /// Distinct (category, value) pairs, injected empties included.
    pub fn value_count(&self) -> usize {
        self.traits.values().map(HashMap::len).sum()
    }

    fn record(&mut self, trait_type: &str, value: &str, id: &str) {
        self.traits
            .entry(trait_type.trim().to_string())
            .or_default()
            .entry(value.trim().to_string())
            .or_default()
            .insert(id.to_string());
    }
}

/// Build the index over every attribute of every asset, placeholders included.
pub fn aggregate_rarity(mints: &[Mint]) -> RarityIndex {
    let mut index = RarityIndex::default();
    for mint in mints {
        for attr in &mint.metadata.attributes {
            index.record(&attr.trait_type, &attr.value, &mint.id);
        }
    }
    index
}
