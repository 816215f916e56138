use serde::{Deserialize, Serialize};

/// Presentation metadata for a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDescription {
    /// Cover image URL
    pub image: String,
    pub description: String,
}
