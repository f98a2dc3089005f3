//! moonrank-ranker — Rarity ranking engine.
//!
//! Stages run in order: schema normalisation, trait normalisation,
//! shape inference, slot completion, rarity aggregation, scoring, ranking.
//! `pipeline` wires them together.

pub mod config;
pub mod schema;
pub mod traits;
pub mod shape;
pub mod aggregate;
pub mod natural;
pub mod scorer;
pub mod rank;
pub mod dedup;
pub mod pipeline;

pub use config::{RankConfig, AUTO_FILTERED_ATTRIBUTES};
pub use pipeline::{rank_documents, rank_rarity, RankedCollection, SourceDocument};
