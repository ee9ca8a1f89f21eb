//! File-backed local store: one JSON document per key.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use aequora_core::result::AppResult;
use aequora_core::traits::store::LocalStore;

/// File-backed store provider.
///
/// Each key maps to one file under the data directory. Keys are
/// sanitized into filenames, so two distinct keys that sanitize to the
/// same name would collide; the key builders in [`crate::keys`] only emit
/// characters that sanitize uniquely.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding one file per key.
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the given directory, creating it if
    /// needed.
    pub async fn new(root: impl AsRef<Path>) -> AppResult<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Resolve the file path backing a key.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

#[async_trait]
impl LocalStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key);
        tokio::fs::write(&path, value).await?;
        debug!(key, path = %path.display(), "Wrote store entry");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
