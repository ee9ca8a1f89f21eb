//! Local store configuration.

use serde::{Deserialize, Serialize};

/// Settings for the per-user local notification store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider: `"memory"` or `"file"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Directory holding the file-backed store data.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Maximum number of local notifications retained per user.
    ///
    /// Legacy local notifications are never expired by the feed itself,
    /// so the store enforces this cap on write, dropping the oldest
    /// entries first.
    #[serde(default = "default_max_entries")]
    pub max_entries_per_user: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            directory: default_directory(),
            max_entries_per_user: default_max_entries(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_directory() -> String {
    "data/store".to_string()
}

fn default_max_entries() -> usize {
    200
}
