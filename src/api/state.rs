use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{Catalog, GameDescription, ItemId};
use crate::store::OwnershipStore;

const DEFAULT_PAGE_SIZE: usize = 10;

/// Shared application state
///
/// The catalog is an immutable snapshot loaded at startup. Ownership lives
/// behind the store, which handles its own locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ownership: Arc<dyn OwnershipStore>,
    pub descriptions: Arc<HashMap<ItemId, GameDescription>>,
    pub page_size: usize,
}

impl AppState {
    /// Creates state with no descriptions and the default page size
    pub fn new(catalog: Catalog, ownership: Arc<dyn OwnershipStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            ownership,
            descriptions: Arc::new(HashMap::new()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_descriptions(mut self, descriptions: HashMap<ItemId, GameDescription>) -> Self {
        self.descriptions = Arc::new(descriptions);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn description(&self, game: &str) -> Option<GameDescription> {
        self.descriptions.get(game).cloned()
    }
}
