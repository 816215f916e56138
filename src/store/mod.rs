//! Data stores the recommendation engine reads from
//!
//! The engine only ever sees plain snapshots (`Catalog`, owned item lists). These
//! stores own loading and persistence: CSV files on disk or memory for tests.

use crate::{
    error::AppResult,
    models::{ItemId, UserId},
};

pub mod catalog;
pub mod descriptions;
pub mod memory;
pub mod ownership;

pub use catalog::CsvCatalogStore;
pub use descriptions::load_descriptions;
pub use memory::InMemoryOwnershipStore;
pub use ownership::CsvOwnershipStore;

/// Trait for ownership record stores
///
/// Records are append-only. Every read returns a consistent snapshot; an append
/// racing a read may or may not be visible to it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait OwnershipStore: Send + Sync {
    /// Items owned by `username`, in insertion order, duplicates included
    async fn owned_by(&self, username: &str) -> AppResult<Vec<ItemId>>;

    /// Appends an ownership record
    async fn append(&self, username: &str, game: &str) -> AppResult<()>;

    /// Distinct users with at least one record, in first-seen order
    async fn users(&self) -> AppResult<Vec<UserId>>;

    /// Store name for logging
    fn name(&self) -> &'static str;
}
