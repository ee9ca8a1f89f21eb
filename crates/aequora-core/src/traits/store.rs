//! Local store trait for pluggable key-value backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for local key-value backends (file-backed or in-memory).
///
/// All values are serialized as strings (JSON). Key namespacing is the
/// caller's responsibility; the store itself applies no expiry.
#[async_trait]
pub trait LocalStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any existing value for the key.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Get a typed value by deserializing from JSON.
    async fn get_json<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key).await? {
            Some(value) => {
                let parsed = serde_json::from_str(&value)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value by serializing to JSON.
    async fn set_json<T: serde::Serialize + Sync>(&self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        let serialized = serde_json::to_string(value)?;
        self.set(key, &serialized).await
    }
}
