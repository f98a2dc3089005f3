//! End-to-end rarity ranking.
//!
//! Orchestrates the full flow for one collection:
//!   1. Normalise and decode raw documents (parallel, per document)
//!   2. Apply optional trait / value remapping
//!   3. Drop blank trait categories
//!   4. Infer the collection shape and complete every asset's slots
//!   5. Build the (category, value) frequency index
//!   6. Score every asset (parallel, per asset)
//!   7. Sort, assign ranks, and group duplicates
//!
//! Every run recomputes the whole collection; a failure anywhere before
//! step 2 aborts the run and nothing is ranked.

use std::collections::HashSet;
use std::time::Instant;

use moonrank_common::{Metadata, Mint, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::aggregate::aggregate_rarity;
use crate::config::RankConfig;
use crate::dedup::{duplicate_count, find_duplicates};
use crate::rank::sort_and_rank;
use crate::schema::decode_document;
use crate::scorer::score_mints;
use crate::shape::{create_slots, find_maximum_shape};
use crate::traits::{map_traits, map_values, normalize_traits};

/// A raw metadata document and where it came from.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Label used in errors and for identifier derivation (usually a path)
    pub source: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(source: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { source: source.into(), bytes: bytes.into() }
    }
}

/// Output of a ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCollection {
    /// Assets in rank order, rarest first
    pub mints: Vec<Mint>,
    /// Identifier clusters that share a rank explanation
    pub duplicates: Vec<Vec<String>>,
}

impl RankedCollection {
    pub fn duplicate_count(&self) -> usize {
        duplicate_count(&self.duplicates)
    }
}

/// Decode every document; any failure fails the batch.
///
/// Decoding runs in parallel, but the error reported is always the one for
/// the earliest failing document in input order.
pub fn decode_documents(documents: &[SourceDocument]) -> Result<Vec<Metadata>> {
    let decoded: Vec<Result<Metadata>> = documents
        .par_iter()
        .map(|doc| decode_document(&doc.source, &doc.bytes))
        .collect();
    decoded.into_iter().collect()
}

/// Decode raw documents, derive identifiers, and rank the collection.
#[instrument(skip_all, fields(n = documents.len()))]
pub fn rank_documents<F>(
    documents: &[SourceDocument],
    derive_id: F,
    config: &RankConfig,
) -> Result<RankedCollection>
where
    F: Fn(&SourceDocument, &Metadata) -> String,
{
    let metadata = decode_documents(documents)?;
    info!("rank_documents: {} metadata objects decoded", metadata.len());

    let mints = documents
        .iter()
        .zip(metadata)
        .map(|(doc, md)| Mint::new(derive_id(doc, &md), md))
        .collect();

    Ok(rank_rarity(mints, config))
}

/// Rank already decoded assets.
#[instrument(skip_all, fields(n = mints.len()))]
pub fn rank_rarity(mints: Vec<Mint>, config: &RankConfig) -> RankedCollection {
    let started = Instant::now();
    warn_on_duplicate_ids(&mints);

    let mints = map_traits(mints, &config.trait_map);
    let mints = map_values(mints, &config.value_map);
    let mints = normalize_traits(mints);

    let shape = find_maximum_shape(&mints);
    let mints = create_slots(mints, &shape);

    let index = aggregate_rarity(&mints);
    info!(
        "rank_rarity: {} trait categories, {} distinct values",
        index.trait_count(),
        index.value_count()
    );
    let mints = score_mints(mints, &index, config);

    let mints = sort_and_rank(mints);
    let duplicates = find_duplicates(&mints);

    let ranked = RankedCollection { mints, duplicates };
    info!("rank_rarity: took {:?} to rank", started.elapsed());
    info!("Dupes: {}", ranked.duplicate_count());
    ranked
}

fn warn_on_duplicate_ids(mints: &[Mint]) {
    let mut seen = HashSet::with_capacity(mints.len());
    for mint in mints {
        if !seen.insert(mint.id.as_str()) {
            warn!("identifier {} appears more than once; frequencies will undercount", mint.id);
        }
    }
}
