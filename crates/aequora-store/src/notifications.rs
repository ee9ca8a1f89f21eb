//! Typed per-user notification store.

use std::sync::Arc;

use tracing::{debug, warn};

use aequora_core::config::store::StoreConfig;
use aequora_core::result::AppResult;
use aequora_core::traits::store::LocalStore;
use aequora_core::types::UserId;
use aequora_entity::LocalNotification;

use crate::keys;

/// Reads and writes the legacy local notification list of a user.
///
/// Every access is namespaced by user id, so one user's entries can never
/// surface in another user's feed. Corrupt or missing stored state reads
/// as an empty list rather than an error.
#[derive(Debug, Clone)]
pub struct LocalNotificationStore {
    /// Underlying key-value store.
    store: Arc<dyn LocalStore>,
    /// Maximum number of entries retained per user.
    max_entries_per_user: usize,
}

impl LocalNotificationStore {
    /// Create a typed store over the given provider.
    pub fn new(store: Arc<dyn LocalStore>, config: &StoreConfig) -> Self {
        Self {
            store,
            max_entries_per_user: config.max_entries_per_user,
        }
    }

    /// Load the local notification list for a user.
    ///
    /// Also removes the legacy shared key left behind by builds that
    /// predate per-user namespacing. Unreadable or unparsable stored
    /// state degrades to an empty list with a warning.
    pub async fn load(&self, user_id: UserId) -> Vec<LocalNotification> {
        if let Err(e) = self.store.remove(keys::LEGACY_SHARED_KEY).await {
            debug!("Failed to remove legacy shared notification key: {e}");
        }

        let key = keys::notifications_for_user(user_id);
        let raw = match self.store.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(%user_id, "Local store unavailable, treating as empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(%user_id, "Corrupt local notification list, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Persist the local notification list for a user.
    ///
    /// Enforces the per-user size cap: when over the cap, the newest
    /// entries by timestamp are kept and the rest dropped.
    pub async fn save(&self, user_id: UserId, items: &[LocalNotification]) -> AppResult<()> {
        let key = keys::notifications_for_user(user_id);

        if items.len() > self.max_entries_per_user {
            let mut capped = items.to_vec();
            capped.sort_by_key(|n| std::cmp::Reverse(n.timestamp));
            capped.truncate(self.max_entries_per_user);
            debug!(
                %user_id,
                dropped = items.len() - capped.len(),
                "Capped local notification list"
            );
            let serialized = serde_json::to_string(&capped)?;
            return self.store.set(&key, &serialized).await;
        }

        let serialized = serde_json::to_string(items)?;
        self.store.set(&key, &serialized).await
    }

    /// Append one notification to a user's list.
    pub async fn push(&self, user_id: UserId, notification: LocalNotification) -> AppResult<()> {
        let mut items = self.load(user_id).await;
        items.push(notification);
        self.save(user_id, &items).await
    }

    /// Rewrite every stored entry's `read` flag to `true`.
    pub async fn mark_all_read(&self, user_id: UserId) -> AppResult<()> {
        let mut items = self.load(user_id).await;
        for item in &mut items {
            item.read = true;
        }
        self.save(user_id, &items).await
    }
}
