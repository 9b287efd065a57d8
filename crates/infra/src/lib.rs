//! Infrastructure layer: backing-file persistence and the locked inventory store.

pub mod flat_file;
pub mod store;

pub use flat_file::{FlatFile, LoadSummary, StorageError};
pub use store::InventoryStore;
