use serde::{Deserialize, Serialize};

use super::{AttributeVector, ItemId};

/// Averaged attribute vector of the items a user owns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TasteProfile {
    pub attributes: AttributeVector,
    /// Ownership entries that matched a catalog item, duplicates included
    pub matched: usize,
    /// Ownership entries whose item is not in the catalog
    pub skipped: usize,
}

/// A catalog item with its percentage score in [0, 100]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    pub game: ItemId,
    pub score: f64,
}

impl ScoredItem {
    pub fn new(game: impl Into<ItemId>, score: f64) -> Self {
        Self {
            game: game.into(),
            score,
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

/// Display band for a recommendation score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// Above 75
    High,
    /// 50 to 75 inclusive
    Medium,
    /// Below 50
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score > 75.0 {
            ScoreTier::High
        } else if score >= 50.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

/// A fixed-size window over a ranked list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Zero-based page index
    pub page: usize,
    /// 1-based rank of the first item on the page
    pub first_rank: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<'a, T> Page<'a, T> {
    /// Slices `items` into the page'th window of `page_size`.
    /// Pages past the end come back empty.
    pub fn slice(items: &'a [T], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let start = page.saturating_mul(page_size).min(items.len());
        let end = start.saturating_add(page_size).min(items.len());

        Self {
            items: &items[start..end],
            page,
            first_rank: start + 1,
            has_previous: page > 0,
            has_next: end < items.len(),
        }
    }
}
