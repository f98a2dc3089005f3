//! Collection shape inference and slot completion.
//!
//! Some categories repeat on a single asset (several "Layer" entries, say).
//! The shape records the largest repeat count seen for each category, and
//! every asset is then padded with empty placeholders up to that count so
//! frequencies are taken over the same number of slots everywhere.

use std::collections::{BTreeMap, HashMap};

use moonrank_common::{MetadataAttribute, Mint};
use tracing::{debug, info};

/// Category → maximum number of occurrences on any single asset.
pub type Shape = BTreeMap<String, usize>;

/// Scan the collection once and compute its shape.
pub fn find_maximum_shape(mints: &[Mint]) -> Shape {
    let mut shape = Shape::new();

    for mint in mints {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for attr in &mint.metadata.attributes {
            *counts.entry(attr.trait_type.as_str()).or_default() += 1;
        }

        for (trait_type, count) in counts {
            let max = shape.entry(trait_type.to_string()).or_default();
            *max = (*max).max(count);
        }
    }

    info!("find_maximum_shape: shape {shape:?}");
    shape
}

/// Assign slots to existing occurrences and append injected placeholders
/// until every asset matches `shape`.
pub fn create_slots(mut mints: Vec<Mint>, shape: &Shape) -> Vec<Mint> {
    for mint in &mut mints {
        let attributes = &mut mint.metadata.attributes;

        for (trait_type, &wanted) in shape {
            let mut found = 0;
            for attr in attributes.iter_mut().filter(|a| a.trait_type == *trait_type) {
                attr.slot = found;
                found += 1;
            }

            for slot in found..wanted {
                debug!(
                    "create_slots: creating empty slot {slot}:`{trait_type}` for {} ({})",
                    mint.metadata.name, mint.id
                );
                attributes.push(MetadataAttribute::injected(trait_type.as_str(), slot));
            }
        }
    }
    mints
}
