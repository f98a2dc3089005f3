//! Duplicate detection over ranked assets.
//!
//! Two assets are duplicates when their rank-explain lists are identical
//! record by record: same category, value, times_seen and total_seen, in the
//! same order. Nothing in the filtered rarity can tell them apart.

use std::collections::HashMap;
use std::fmt;

use moonrank_common::{Mint, RankInfo};
use tracing::debug;

/// Canonical form of one asset's rank-explain list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DupeKey(Vec<(String, String, usize, usize)>);

impl DupeKey {
    pub fn from_explain(explain: &[RankInfo]) -> Self {
        DupeKey(
            explain
                .iter()
                .map(|r| (r.attribute.clone(), r.value.clone(), r.times_seen, r.total_seen))
                .collect(),
        )
    }
}

impl fmt::Display for DupeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (attribute, value, times_seen, total_seen)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{{{attribute:?} {value:?} {times_seen}/{total_seen}}}")?;
        }
        write!(f, "]")
    }
}

/// Group identifiers by duplicate key; only groups of two or more are kept.
///
/// Clusters come out in the order their first member appears in `mints`,
/// and members keep that order too, so ranked input gives a stable report.
pub fn find_duplicates(mints: &[Mint]) -> Vec<Vec<String>> {
    let mut slot_of: HashMap<DupeKey, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for mint in mints {
        let key = DupeKey::from_explain(&mint.rank_explain);
        debug!("dupe key for {}: {key}", mint.id);
        let slot = *slot_of.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(mint.id.clone());
    }

    groups.retain(|g| g.len() > 1);
    groups
}

/// Total number of assets that belong to some duplicate cluster.
pub fn duplicate_count(duplicates: &[Vec<String>]) -> usize {
    duplicates.iter().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moonrank_common::Metadata;
    use pretty_assertions::assert_eq;

    fn with_explain(id: &str, explain: &[(&str, &str, usize)]) -> Mint {
        let mut mint = Mint::new(id, Metadata::default());
        mint.rank_explain = explain
            .iter()
            .map(|(attribute, value, times_seen)| RankInfo {
                attribute: attribute.to_string(),
                value: value.to_string(),
                value_percentage: *times_seen as f64 * 25.0,
                times_seen: *times_seen,
                total_seen: 4,
            })
            .collect();
        mint
    }

    #[test]
    fn test_identical_explains_are_grouped() {
        let mints = vec![
            with_explain("a", &[("Hat", "Blue", 1)]),
            with_explain("b", &[("Hat", "Red", 3)]),
            with_explain("c", &[("Eyes", "Green", 2)]),
            with_explain("d", &[("Hat", "Red", 3)]),
            with_explain("e", &[("Hat", "Red", 3)]),
            with_explain("f", &[("Eyes", "Green", 2)]),
        ];
        let dupes = find_duplicates(&mints);
        assert_eq!(dupes, vec![vec!["b", "d", "e"], vec!["c", "f"]]);
        assert_eq!(duplicate_count(&dupes), 5);
    }

    #[test]
    fn test_order_of_records_matters() {
        let mints = vec![
            with_explain("a", &[("Hat", "Red", 2), ("Eyes", "Blue", 2)]),
            with_explain("b", &[("Eyes", "Blue", 2), ("Hat", "Red", 2)]),
        ];
        assert!(find_duplicates(&mints).is_empty());
    }

    #[test]
    fn test_empty_explains_are_duplicates_of_each_other() {
        let mints = vec![with_explain("a", &[]), with_explain("b", &[])];
        assert_eq!(find_duplicates(&mints), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_dupe_key_display_is_canonical() {
        let mint = with_explain("a", &[("Hat", "Red", 2), ("Eyes", "", 1)]);
        let key = DupeKey::from_explain(&mint.rank_explain);
        assert_eq!(key.to_string(), r#"[{"Hat" "Red" 2/4} {"Eyes" "" 1/4}]"#);
    }
}
