use serde::{Deserialize, Serialize};

use super::{ItemId, UserId};

/// Assertion that a user owns an item. Append-only; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRecord {
    pub username: UserId,
    pub game: ItemId,
}

impl OwnershipRecord {
    pub fn new(username: impl Into<UserId>, game: impl Into<ItemId>) -> Self {
        Self {
            username: username.into(),
            game: game.into(),
        }
    }
}

/// Items owned by `username`, in record order
pub fn owned_items(records: &[OwnershipRecord], username: &str) -> Vec<ItemId> {
    records
        .iter()
        .filter(|r| r.username == username)
        .map(|r| r.game.clone())
        .collect()
}

/// Distinct usernames in first-seen order
pub fn distinct_users(records: &[OwnershipRecord]) -> Vec<UserId> {
    let mut users: Vec<UserId> = Vec::new();
    for record in records {
        if !users.contains(&record.username) {
            users.push(record.username.clone());
        }
    }
    users
}
