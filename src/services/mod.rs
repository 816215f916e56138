pub mod distance;
pub mod profile;
pub mod ranking;
pub mod recommender;

pub use profile::build_profile;
pub use recommender::{recommend, recommend_for_items, recommendations_for, RecommendError};
