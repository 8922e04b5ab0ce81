mod errors;
mod file_backend;
mod memory_backend;

pub use errors::PersistenceError;
pub use file_backend::FileBackend;
pub use memory_backend::MemoryBackend;

/// Key under which the transaction snapshot is saved.
pub const STORAGE_KEY: &str = "savedTransactions";

/// Synchronous key-value store for serialized snapshots. Saving replaces the previous value
/// under the key as a whole.
pub trait PersistenceBackend {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}
