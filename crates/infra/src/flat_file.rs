//! Flat text backing file: one encoded record per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use foodtrack_inventory::{FoodItem, Inventory};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts reported by a load.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Backing file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append every decodable line of the file to `inventory`.
    ///
    /// Blank lines are ignored and malformed lines are skipped with a warning.
    /// Bytes that are not valid UTF-8 are replaced, not rejected, so one bad
    /// byte never hides the lines after it. If reading fails part-way, the
    /// records decoded so far stay in `inventory` and the error is returned.
    pub fn load_into(&self, inventory: &mut Inventory) -> Result<LoadSummary, StorageError> {
        let file = File::open(&self.path).map_err(|source| self.read_error(source))?;
        self.read_from(BufReader::new(file), inventory)
    }

    fn read_from(
        &self,
        reader: impl BufRead,
        inventory: &mut Inventory,
    ) -> Result<LoadSummary, StorageError> {
        let mut summary = LoadSummary::default();

        for (idx, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|source| self.read_error(source))?;
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match FoodItem::decode(line) {
                Ok(item) => {
                    inventory.extend_loaded([item]);
                    summary.loaded += 1;
                }
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = idx + 1,
                        error = %err,
                        "skipping malformed inventory line"
                    );
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Overwrite the file with one line per item, in the given order.
    pub fn write_all(&self, items: &[FoodItem]) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|source| self.write_error(source))?;
        let mut out = BufWriter::new(file);
        for item in items {
            writeln!(out, "{}", item.encode()).map_err(|source| self.write_error(source))?;
        }
        out.flush().map_err(|source| self.write_error(source))
    }

    fn read_error(&self, source: io::Error) -> StorageError {
        StorageError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
