use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{distinct_users, owned_items, ItemId, OwnershipRecord, UserId},
};

use super::OwnershipStore;

const HEADER: [&str; 2] = ["Username", "Game"];

/// Ownership store backed by a `Username,Game` CSV file.
///
/// The file is read once at startup. Appends go to disk first and then to the
/// in-memory copy, so readers never see a record the file does not hold.
pub struct CsvOwnershipStore {
    path: PathBuf,
    records: RwLock<Vec<OwnershipRecord>>,
}

impl CsvOwnershipStore {
    /// Opens the store, loading existing records from `path`.
    ///
    /// A missing file starts an empty store. Rows with fewer than two fields
    /// are skipped.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let records = if path.exists() {
            read_records(&path)?
        } else {
            tracing::warn!(path = %path.display(), "Ownership file not found, starting empty");
            Vec::new()
        };

        tracing::info!(
            path = %path.display(),
            record_count = records.len(),
            "Loaded ownership records"
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_records(path: &Path) -> AppResult<Vec<OwnershipRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(line = line + 2, error = %e, "Skipping unreadable ownership row");
                continue;
            }
        };
        match (row.get(0), row.get(1)) {
            (Some(username), Some(game)) if !username.is_empty() && !game.is_empty() => {
                records.push(OwnershipRecord::new(username, game));
            }
            _ => {
                tracing::warn!(line = line + 2, row = ?row, "Skipping malformed ownership row");
            }
        }
    }

    Ok(records)
}

fn append_record(path: &Path, record: &OwnershipRecord) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)?;

    let len = file.metadata()?.len();
    let is_new = len == 0;
    if !is_new && !ends_with_newline(&mut file, len)? {
        // A hand-edited file may lack the final line break
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if is_new {
        writer.write_record(HEADER)?;
    }
    writer.write_record([record.username.as_str(), record.game.as_str()])?;
    writer.flush()?;

    Ok(())
}

fn ends_with_newline(file: &mut File, len: u64) -> std::io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[async_trait::async_trait]
impl OwnershipStore for CsvOwnershipStore {
    async fn owned_by(&self, username: &str) -> AppResult<Vec<ItemId>> {
        let records = self.records.read().await;
        Ok(owned_items(&records, username))
    }

    async fn append(&self, username: &str, game: &str) -> AppResult<()> {
        let record = OwnershipRecord::new(username, game);

        // Holding the write lock keeps file order and memory order identical
        let mut records = self.records.write().await;

        let path = self.path.clone();
        let on_disk = record.clone();
        tokio::task::spawn_blocking(move || append_record(&path, &on_disk))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

        records.push(record);

        tracing::debug!(username, game, "Ownership record appended");
        Ok(())
    }

    async fn users(&self) -> AppResult<Vec<UserId>> {
        let records = self.records.read().await;
        Ok(distinct_users(&records))
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}
