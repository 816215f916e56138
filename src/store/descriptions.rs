use std::collections::HashMap;
use std::path::Path;

use crate::{
    error::AppResult,
    models::{GameDescription, ItemId},
};

/// Loads per-game presentation metadata from a `;`-delimited file
/// (`name;image;description`, with a header row).
///
/// Descriptions are optional, so a missing file yields an empty map and rows
/// with fewer than three fields are skipped.
pub fn load_descriptions(path: impl AsRef<Path>) -> AppResult<HashMap<ItemId, GameDescription>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Descriptions file not found, continuing without");
        return Ok(HashMap::new());
    }

    let reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let descriptions = parse_descriptions(reader);
    tracing::info!(
        path = %path.display(),
        count = descriptions.len(),
        "Loaded game descriptions"
    );

    Ok(descriptions)
}

fn parse_descriptions<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> HashMap<ItemId, GameDescription> {
    let mut descriptions = HashMap::new();

    for row in reader.records() {
        match row {
            Ok(row) if row.len() >= 3 => {
                descriptions.insert(
                    row[0].to_string(),
                    GameDescription {
                        image: row[1].to_string(),
                        description: row[2].to_string(),
                    },
                );
            }
            Ok(row) => {
                tracing::warn!(row = ?row, "Skipping malformed description row");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable description row");
            }
        }
    }

    descriptions
}
