use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use super::{AttributeVector, CategorySchema, ItemId};

/// Errors raised while assembling a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Item '{item}' has {found} attributes, expected {expected}")]
    DimensionMismatch {
        item: String,
        expected: usize,
        found: usize,
    },

    #[error("Item '{item}' has an invalid weight for '{category}': {value}")]
    InvalidWeight {
        item: String,
        category: String,
        value: String,
    },

    #[error("Duplicate item in catalog: {0}")]
    DuplicateItem(String),

    #[error("Catalog categories {found} do not match configured categories {expected}")]
    SchemaMismatch {
        expected: CategorySchema,
        found: CategorySchema,
    },

    #[error("Catalog source has no header row")]
    MissingHeader,

    #[error("Catalog CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A recommendable item and its category weights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: ItemId,
    pub attributes: AttributeVector,
}

impl Item {
    pub fn new(name: impl Into<ItemId>, attributes: AttributeVector) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// Immutable catalog snapshot.
///
/// Items keep their load order, which is also the tie-break order for ranking.
/// Every item's vector has been checked against `schema`.
#[derive(Debug, Clone)]
pub struct Catalog {
    schema: CategorySchema,
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting items whose vector disagrees with `schema`
    /// and names that appear twice.
    pub fn new(schema: CategorySchema, items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.attributes.len() == schema.len() && !item.attributes.matches_schema(&schema) {
                return Err(CatalogError::SchemaMismatch {
                    expected: schema.clone(),
                    found: CategorySchema::new(item.attributes.categories()),
                });
            }
            if !item.attributes.matches_schema(&schema) {
                return Err(CatalogError::DimensionMismatch {
                    item: item.name.clone(),
                    expected: schema.len(),
                    found: item.attributes.len(),
                });
            }
            if let Some((category, weight)) = item
                .attributes
                .iter()
                .find(|(_, w)| !w.is_finite() || *w < 0.0)
            {
                return Err(CatalogError::InvalidWeight {
                    item: item.name.clone(),
                    category: category.to_string(),
                    value: weight.to_string(),
                });
            }
            if index.insert(item.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateItem(item.name.clone()));
            }
        }

        Ok(Self {
            schema,
            items,
            index,
        })
    }

    /// Catalog with no items
    pub fn empty(schema: CategorySchema) -> Self {
        Self {
            schema,
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn schema(&self) -> &CategorySchema {
        &self.schema
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&position| &self.items[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Items in catalog order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> CategorySchema {
        CategorySchema::new(["x", "y"])
    }

    fn item(name: &str, x: f64, y: f64) -> Item {
        Item::new(
            name,
            AttributeVector::new(vec![("x".to_string(), x), ("y".to_string(), y)]),
        )
    }

    #[test]
    fn test_new_catalog_preserves_order() {
        let catalog = Catalog::new(
            schema(),
            vec![item("B", 0.0, 1.0), item("A", 1.0, 0.0)],
        )
        .unwrap();
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(catalog.get("A").unwrap().attributes.get("x"), Some(1.0));
        assert!(catalog.contains("B"));
        assert!(!catalog.contains("C"));
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let short = Item::new(
            "Short",
            AttributeVector::new(vec![("x".to_string(), 1.0)]),
        );
        let result = Catalog::new(schema(), vec![short]);
        assert!(matches!(
            result,
            Err(CatalogError::DimensionMismatch { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_reordered_categories_are_a_schema_mismatch() {
        let swapped = Item::new(
            "Swapped",
            AttributeVector::new(vec![("y".to_string(), 1.0), ("x".to_string(), 0.0)]),
        );
        let result = Catalog::new(schema(), vec![swapped]);
        assert!(matches!(
            result,
            Err(CatalogError::SchemaMismatch { ref found, .. })
                if found == &CategorySchema::new(["y", "x"])
        ));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let result = Catalog::new(schema(), vec![item("Bad", -1.0, 0.0)]);
        assert!(matches!(result, Err(CatalogError::InvalidWeight { .. })));
    }

    #[test]
    fn test_rejects_duplicate_item() {
        let result = Catalog::new(schema(), vec![item("A", 1.0, 0.0), item("A", 0.0, 1.0)]);
        assert!(matches!(result, Err(CatalogError::DuplicateItem(name)) if name == "A"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty(schema());
        assert!(catalog.is_empty());
        assert_eq!(catalog.schema().len(), 2);
    }
}
