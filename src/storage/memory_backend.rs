use crate::storage::errors::PersistenceError;
use crate::storage::PersistenceBackend;
use dashmap::DashMap;
use std::sync::Arc;

/// In-process backend. Values live as long as the backend (or a clone of it) does.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    cache: Arc<DashMap<String, String>>
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl PersistenceBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.cache.get(key).map(|entry| entry.value().clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.cache.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
