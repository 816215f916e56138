use crate::models::{ItemId, ScoredItem};

use super::RecommendError;

/// Converts raw distances into percentage scores and sorts them, best first.
///
/// The farthest item scores 0 and an item at distance 0 scores 100. When the
/// maximum distance is zero every item is equally close and all of them score
/// 100. Equal scores keep their input order.
pub fn normalize_and_rank(distances: Vec<(ItemId, f64)>) -> Result<Vec<ScoredItem>, RecommendError> {
    let max_distance = distances
        .iter()
        .map(|(_, distance)| *distance)
        .reduce(f64::max)
        .ok_or(RecommendError::EmptyCatalog)?;

    let mut ranked: Vec<ScoredItem> = distances
        .into_iter()
        .map(|(game, distance)| {
            let score = if max_distance == 0.0 {
                100.0
            } else {
                100.0 - (distance / max_distance * 100.0)
            };
            ScoredItem::new(game, score)
        })
        .collect();

    // `sort_by` is stable, so ties stay in catalog order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(ranked)
}
