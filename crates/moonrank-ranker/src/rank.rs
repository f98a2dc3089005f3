//! Total ordering and rank assignment.

use std::cmp::Ordering;

use moonrank_common::Mint;
use tracing::debug;

use crate::natural::natural_cmp;

/// Ranking key: filtered rarity ascending (rarest first), then display name
/// in natural order, then identifier in byte order.
pub fn mint_cmp(a: &Mint, b: &Mint) -> Ordering {
    a.filtered_rarity
        .total_cmp(&b.filtered_rarity)
        .then_with(|| natural_cmp(a.name(), b.name()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort the collection and assign 1-based ranks.
///
/// An asset shares its predecessor's rank iff their filtered rarities are
/// bit-identical; otherwise its rank is its position in the sorted order.
pub fn sort_and_rank(mut mints: Vec<Mint>) -> Vec<Mint> {
    mints.sort_by(mint_cmp);

    let mut previous: Option<(u64, usize)> = None;
    for (i, mint) in mints.iter_mut().enumerate() {
        let bits = mint.filtered_rarity.to_bits();
        mint.rank = match previous {
            Some((prev_bits, prev_rank)) if prev_bits == bits => prev_rank,
            _ => i + 1,
        };
        previous = Some((bits, mint.rank));

        debug!(
            "Rank {}: {} (Rarity {:.16}) [{}]",
            mint.rank,
            mint.metadata.name,
            mint.filtered_rarity,
            mint.id
        );
    }
    mints
}
