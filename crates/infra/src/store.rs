//! Locked inventory store with write-through persistence.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use foodtrack_inventory::{AddOutcome, FoodItem, Inventory};

use crate::flat_file::{FlatFile, LoadSummary, StorageError};

#[derive(Debug)]
struct StoreState {
    inventory: Inventory,
    file: Option<FlatFile>,
}

impl StoreState {
    fn save(&self) -> Result<(), StorageError> {
        match &self.file {
            Some(file) => file.write_all(self.inventory.items()),
            None => Ok(()),
        }
    }

    fn load(&mut self) -> Result<LoadSummary, StorageError> {
        match &self.file {
            Some(file) => file.load_into(&mut self.inventory),
            None => Ok(LoadSummary::default()),
        }
    }

    /// Save after a mutation. Failures are reported, never propagated: the
    /// in-memory collection is already correct and the next save catches up.
    fn persist(&self) {
        if let Err(err) = self.save() {
            tracing::error!(error = %err, "failed to persist inventory; keeping in-memory state");
        }
    }
}

/// Inventory with flat-file persistence.
///
/// The collection and the backing file live behind one lock, so each public
/// operation (mutation plus the rewrite that follows it) is observed as a unit.
/// Without a backing file the store is purely in-memory.
#[derive(Debug)]
pub struct InventoryStore {
    state: Mutex<StoreState>,
}

impl InventoryStore {
    /// Open a store, loading `path` if it is set and the file exists.
    ///
    /// Load failures are logged; the store starts with whatever was read.
    pub fn open(path: Option<PathBuf>) -> Self {
        let file = path.map(FlatFile::new);
        let should_load = file.as_ref().is_some_and(FlatFile::exists);
        let store = Self {
            state: Mutex::new(StoreState {
                inventory: Inventory::new(),
                file,
            }),
        };

        if should_load {
            match store.load() {
                Ok(summary) => tracing::info!(
                    loaded = summary.loaded,
                    skipped = summary.skipped,
                    "inventory loaded"
                ),
                Err(err) => tracing::error!(error = %err, "failed to load inventory"),
            }
        }

        store
    }

    /// Store without persistence.
    pub fn in_memory() -> Self {
        Self::open(None)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Every mutation completes before any fallible I/O, so a poisoned
        // state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Backing file path, if persistence is enabled.
    pub fn persistence_path(&self) -> Option<PathBuf> {
        self.lock().file.as_ref().map(|f| f.path().to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.lock().inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().inventory.is_empty()
    }

    /// Add stock, merging into an existing record of the same identity.
    pub fn add(&self, item: FoodItem) {
        let mut state = self.lock();
        let name = item.name().to_string();
        match state.inventory.add(item) {
            AddOutcome::Merged { quantity } => {
                tracing::debug!(%name, quantity, "merged into existing record")
            }
            AddOutcome::Inserted => tracing::debug!(%name, "inserted new record"),
        }
        state.persist();
    }

    /// Remove every record with this name. Returns whether any were removed.
    pub fn remove(&self, name: &str) -> bool {
        let mut state = self.lock();
        let removed = state.inventory.remove(name);
        if removed {
            tracing::debug!(%name, "removed all records for name");
            state.persist();
        }
        removed
    }

    /// Remove the record with this name and expiry.
    pub fn remove_specific(&self, name: &str, expiry: NaiveDate) -> bool {
        let mut state = self.lock();
        let removed = state.inventory.remove_specific(name, expiry);
        if removed {
            tracing::debug!(%name, %expiry, "removed record");
            state.persist();
        }
        removed
    }

    /// Set quantity and expiry of the first record with this name.
    pub fn update(&self, name: &str, quantity: i64, expiry: NaiveDate) -> bool {
        let mut state = self.lock();
        let updated = state.inventory.update(name, quantity, expiry);
        if updated {
            tracing::debug!(%name, quantity, %expiry, "updated record");
            state.persist();
        }
        updated
    }

    pub fn view_all(&self) -> Vec<FoodItem> {
        self.lock().inventory.view_all()
    }

    pub fn search_by_name(&self, keyword: &str) -> Vec<FoodItem> {
        self.lock().inventory.search_by_name(keyword)
    }

    /// Records expiring on or before `today`.
    pub fn get_expired(&self, today: NaiveDate) -> Vec<FoodItem> {
        self.lock().inventory.expired(today)
    }

    /// Records expiring on or before `today + days`.
    pub fn get_near_expiry(&self, today: NaiveDate, days: i64) -> Vec<FoodItem> {
        self.lock().inventory.near_expiry(today, days)
    }

    /// Drop every record and persist the empty file.
    pub fn clear_all(&self) {
        let mut state = self.lock();
        state.inventory.clear();
        tracing::debug!("cleared inventory");
        state.persist();
    }

    /// Overwrite the backing file with the current collection.
    pub fn save(&self) -> Result<(), StorageError> {
        self.lock().save()
    }

    /// Append the backing file's records to the collection (no merge).
    pub fn load(&self) -> Result<LoadSummary, StorageError> {
        self.lock().load()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
