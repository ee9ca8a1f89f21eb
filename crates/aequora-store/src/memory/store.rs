//! In-memory local store backed by a concurrent map.
//!
//! Used by tests and by ephemeral sessions where nothing should outlive
//! the process.

use async_trait::async_trait;
use dashmap::DashMap;

use aequora_core::result::AppResult;
use aequora_core::traits::store::LocalStore;

/// In-memory store provider.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value entries.
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl LocalStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
