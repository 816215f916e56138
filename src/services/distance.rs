use crate::models::{Catalog, ItemId, TasteProfile};

/// Manhattan distance from the profile to every catalog item, in catalog order.
///
/// Owned items are scored like any other item.
pub fn score_distances(profile: &TasteProfile, catalog: &Catalog) -> Vec<(ItemId, f64)> {
    catalog
        .items()
        .iter()
        .map(|item| (item.name.clone(), profile.attributes.manhattan(&item.attributes)))
        .collect()
}
