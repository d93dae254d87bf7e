use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::items::types::Item;

/// File name of the persisted shopping list document.
pub const DATA_FILE_NAME: &str = "shopping-list.json";

/// Accessor for the JSON document holding the shopping list.
///
/// The document is a single top-level JSON array of item objects. Writes
/// overwrite the file in full and are not atomic: a crash mid-write may
/// leave a corrupt document.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
    file_path: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let file_path = data_dir.join(DATA_FILE_NAME);
        FileStore {
            data_dir,
            file_path,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Creates the data directory and an empty-array document if absent.
    ///
    /// Idempotent: an existing document is never touched, whatever its
    /// content.
    pub fn ensure_ready(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir(&self.data_dir)?;
            tracing::info!("Data directory created at {}", self.data_dir.display());
        }

        if !self.file_path.exists() {
            fs::write(&self.file_path, "[]")?;
            tracing::info!(
                "Shopping list file created at {}",
                self.file_path.display()
            );
        }

        Ok(())
    }

    /// Reads and decodes the full document.
    pub fn read(&self) -> Result<Vec<Item>> {
        let content = fs::read_to_string(&self.file_path)?;
        serde_json::from_str(&content).map_err(|err| Error::CorruptStorage(err.to_string()))
    }

    /// Serializes `items` and overwrites the document in full.
    pub fn write(&self, items: &[Item]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(items).map_err(|err| Error::Io(err.to_string()))?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
