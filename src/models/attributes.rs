use std::fmt::Display;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The closed, ordered set of category names every attribute vector is keyed by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySchema {
    categories: Arc<[String]>,
}

impl CategorySchema {
    /// Creates a schema from category names, in column order
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

impl Display for CategorySchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.categories.join(", "))
    }
}

/// Ordered mapping from category name to a non-negative weight
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeVector {
    entries: Vec<(String, f64)>,
}

impl AttributeVector {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Vector with every category of `schema` set to zero
    pub fn zeroed(schema: &CategorySchema) -> Self {
        Self {
            entries: schema.categories().iter().map(|c| (c.clone(), 0.0)).collect(),
        }
    }

    /// Weight for a category, `None` if the category is not part of this vector
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, weight)| *weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, weight)| (key.as_str(), *weight))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when this vector carries exactly the schema's categories, in order
    pub fn matches_schema(&self, schema: &CategorySchema) -> bool {
        self.len() == schema.len()
            && self
                .categories()
                .zip(schema.categories())
                .all(|(own, expected)| own == expected)
    }

    /// Adds `other` into this vector, category by category.
    /// Categories missing from `other` are left untouched.
    pub fn accumulate(&mut self, other: &AttributeVector) {
        for (key, weight) in self.entries.iter_mut() {
            if let Some(value) = other.get(key) {
                *weight += value;
            }
        }
    }

    /// Applies `f` to every weight
    pub fn map_weights(mut self, f: impl Fn(f64) -> f64) -> Self {
        for (_, weight) in self.entries.iter_mut() {
            *weight = f(*weight);
        }
        self
    }

    /// L1 distance over the categories both vectors carry.
    /// A category present on only one side is skipped rather than read as zero.
    pub fn manhattan(&self, other: &AttributeVector) -> f64 {
        self.entries
            .iter()
            .filter_map(|(key, weight)| other.get(key).map(|theirs| (weight - theirs).abs()))
            .sum()
    }
}

impl Serialize for AttributeVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, weight) in &self.entries {
            map.serialize_entry(key, weight)?;
        }
        map.end()
    }
}
