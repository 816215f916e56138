mod attributes;
mod catalog;
mod description;
mod ownership;
mod recommendation;

pub use attributes::{AttributeVector, CategorySchema};
pub use catalog::{Catalog, CatalogError, Item};
pub use description::GameDescription;
pub use ownership::{distinct_users, owned_items, OwnershipRecord};
pub use recommendation::{Page, ScoreTier, ScoredItem, TasteProfile};

/// Catalog item identifier (the game's name)
pub type ItemId = String;

/// User identifier (the username)
pub type UserId = String;
