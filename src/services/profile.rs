use crate::models::{AttributeVector, Catalog, ItemId, TasteProfile};

/// Builds a user's taste profile from the items they own.
///
/// Each category is the mean of that category over the owned items found in
/// the catalog, rounded to two decimals. Entries naming items the catalog does
/// not know are skipped and left out of the divisor. Duplicate entries count
/// once per occurrence.
///
/// Returns `None` when no owned entry matches the catalog, including the empty
/// list. That is distinct from a profile whose weights are all zero.
pub fn build_profile(owned: &[ItemId], catalog: &Catalog) -> Option<TasteProfile> {
    let mut sum = AttributeVector::zeroed(catalog.schema());
    let mut matched = 0usize;

    for item in owned.iter().filter_map(|name| catalog.get(name)) {
        sum.accumulate(&item.attributes);
        matched += 1;
    }

    let skipped = owned.len() - matched;
    if skipped > 0 {
        tracing::debug!(matched, skipped, "Owned items missing from catalog were skipped");
    }

    if matched == 0 {
        return None;
    }

    let divisor = matched as f64;
    Some(TasteProfile {
        attributes: sum.map_weights(|total| round2(total / divisor)),
        matched,
        skipped,
    })
}

/// Two-decimal rounding with ties going to the even neighbour (0.125 -> 0.12)
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
