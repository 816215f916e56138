use std::path::Path;

use crate::models::{AttributeVector, Catalog, CatalogError, CategorySchema, Item};

/// Loads the game catalog from a CSV file
///
/// Expected layout: a header row whose first column names the item and whose
/// remaining columns are category names, then one row per item with a
/// non-negative number in every category column.
pub struct CsvCatalogStore;

impl CsvCatalogStore {
    /// Reads and validates the catalog at `path`.
    ///
    /// When `expected` is given the header categories must match it exactly,
    /// otherwise the header defines the schema. Any malformed row fails the
    /// whole load.
    pub fn load(
        path: impl AsRef<Path>,
        expected: Option<&CategorySchema>,
    ) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let catalog = Self::from_reader(reader, expected)?;

        tracing::info!(
            path = %path.display(),
            item_count = catalog.len(),
            categories = %catalog.schema(),
            "Loaded game catalog"
        );

        Ok(catalog)
    }

    /// Parses a catalog from any CSV reader
    pub fn from_reader<R: std::io::Read>(
        mut reader: csv::Reader<R>,
        expected: Option<&CategorySchema>,
    ) -> Result<Catalog, CatalogError> {
        let headers = reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(CatalogError::MissingHeader);
        }

        let found = CategorySchema::new(headers.iter().skip(1));
        let schema = match expected {
            Some(expected) if *expected != found => {
                return Err(CatalogError::SchemaMismatch {
                    expected: expected.clone(),
                    found,
                });
            }
            Some(expected) => expected.clone(),
            None => found,
        };

        let mut items = Vec::new();
        for row in reader.records() {
            let row = row?;
            items.push(parse_item(&row, &schema)?);
        }

        Catalog::new(schema, items)
    }
}

fn parse_item(row: &csv::StringRecord, schema: &CategorySchema) -> Result<Item, CatalogError> {
    let name = row.get(0).unwrap_or_default().to_string();
    let found = row.len().saturating_sub(1);
    if found != schema.len() {
        return Err(CatalogError::DimensionMismatch {
            item: name,
            expected: schema.len(),
            found,
        });
    }

    let mut entries = Vec::with_capacity(schema.len());
    for (category, raw) in schema.categories().iter().zip(row.iter().skip(1)) {
        let weight = raw
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w >= 0.0)
            .ok_or_else(|| CatalogError::InvalidWeight {
                item: name.clone(),
                category: category.clone(),
                value: raw.to_string(),
            })?;
        entries.push((category.clone(), weight));
    }

    Ok(Item::new(name, AttributeVector::new(entries)))
}
