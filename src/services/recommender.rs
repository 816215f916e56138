use thiserror::Error;
use tracing::instrument;

use crate::{
    error::AppResult,
    models::{owned_items, Catalog, ItemId, OwnershipRecord, ScoredItem},
    store::OwnershipStore,
};

use super::{distance::score_distances, profile::build_profile, ranking::normalize_and_rank};

/// Error types for the recommendation engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Catalog is empty: nothing to recommend")]
    EmptyCatalog,
}

/// Ranks every catalog item for `username`.
///
/// A user with no ownership records gets an empty list rather than an error.
/// The result is never truncated; paging is left to the caller.
pub fn recommend(
    username: &str,
    catalog: &Catalog,
    ownership: &[OwnershipRecord],
) -> Result<Vec<ScoredItem>, RecommendError> {
    recommend_for_items(catalog, &owned_items(ownership, username))
}

/// Same pipeline as [`recommend`] for an already filtered ownership list
pub fn recommend_for_items(
    catalog: &Catalog,
    owned: &[ItemId],
) -> Result<Vec<ScoredItem>, RecommendError> {
    if owned.is_empty() {
        return Ok(Vec::new());
    }
    if catalog.is_empty() {
        return Err(RecommendError::EmptyCatalog);
    }

    let Some(profile) = build_profile(owned, catalog) else {
        tracing::warn!(
            owned_count = owned.len(),
            "None of the owned items are in the catalog"
        );
        return Ok(Vec::new());
    };

    normalize_and_rank(score_distances(&profile, catalog))
}

/// Reads `username`'s ownership from the store and ranks the catalog for them
#[instrument(skip(store, catalog), fields(catalog_size = catalog.len()))]
pub async fn recommendations_for(
    store: &dyn OwnershipStore,
    catalog: &Catalog,
    username: &str,
) -> AppResult<Vec<ScoredItem>> {
    let owned = store.owned_by(username).await?;
    let ranked = recommend_for_items(catalog, &owned)?;

    tracing::info!(
        owned_count = owned.len(),
        ranked_count = ranked.len(),
        "Recommendations computed"
    );

    Ok(ranked)
}
