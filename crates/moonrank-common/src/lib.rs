//! moonrank-common — Shared types and errors used across all moonrank crates.

pub mod error;
pub mod metadata;
pub mod mint;

// Re-export commonly used types
pub use error::{MoonrankError, Result};
pub use metadata::{Metadata, MetadataAttribute, MetadataCollection, MetadataCreator, MetadataFile};
pub use mint::{FilteredRankInfo, Mint, RankInfo};
