//! Per-asset trait clean-up that runs before shape inference.

use std::collections::BTreeMap;

use moonrank_common::Mint;
use rayon::prelude::*;
use tracing::debug;

/// Drop attributes whose category is blank after trimming.
pub fn normalize_traits(mints: Vec<Mint>) -> Vec<Mint> {
    mints
        .into_par_iter()
        .map(|mut mint| {
            mint.metadata.attributes.retain(|a| !a.trait_type.trim().is_empty());
            mint
        })
        .collect()
}

/// Rename trait categories. Each attribute is looked up once, so renames
/// never chain (`a → b`, `b → c` does not turn `a` into `c`).
pub fn map_traits(mut mints: Vec<Mint>, trait_map: &BTreeMap<String, String>) -> Vec<Mint> {
    if trait_map.is_empty() {
        return mints;
    }

    for mint in &mut mints {
        for attr in &mut mint.metadata.attributes {
            if let Some(renamed) = trait_map.get(&attr.trait_type) {
                debug!("map_traits: `{}` -> `{}` for {}", attr.trait_type, renamed, mint.metadata.name);
                attr.trait_type.clone_from(renamed);
            }
        }
    }
    mints
}

/// Replace trait values per category, remembering the original value in
/// `pre_mapping`.
pub fn map_values(
    mut mints: Vec<Mint>,
    value_map: &BTreeMap<String, BTreeMap<String, String>>,
) -> Vec<Mint> {
    if value_map.is_empty() {
        return mints;
    }

    for mint in &mut mints {
        for attr in &mut mint.metadata.attributes {
            let Some(replace) = value_map
                .get(&attr.trait_type)
                .and_then(|values| values.get(&attr.value))
            else {
                continue;
            };
            debug!(
                "map_values: `{}` -> `{}` in `{}` for {} ({})",
                attr.value, replace, attr.trait_type, mint.metadata.name, mint.id
            );
            let original = std::mem::replace(&mut attr.value, replace.clone());
            attr.pre_mapping = Some(original);
        }
    }
    mints
}
