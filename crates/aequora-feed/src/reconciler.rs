//! The stateful notification feed.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use aequora_client::NotificationApi;
use aequora_core::result::AppResult;
use aequora_core::types::{Role, UserId};
use aequora_entity::FeedNotification;
use aequora_store::LocalNotificationStore;

use crate::merge;

/// The reconciled feed at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// Merged notifications, newest first.
    pub notifications: Vec<FeedNotification>,
    /// Number of entries with `read == false`.
    pub unread_count: usize,
}

impl FeedSnapshot {
    /// The badge value: `Some(count)` when anything is unread, `None`
    /// when the badge should render nothing (never a literal zero).
    pub fn badge(&self) -> Option<usize> {
        (self.unread_count > 0).then_some(self.unread_count)
    }
}

/// Internal mutable feed state.
#[derive(Debug, Default)]
struct FeedState {
    /// The currently applied snapshot.
    snapshot: FeedSnapshot,
    /// Sequence number of the load that produced the snapshot.
    applied_seq: u64,
}

/// Produces the notification feed for one user session.
///
/// Combines the server page with the user's local records, recomputes the
/// unread count on every load, and exposes the guarded bulk-read
/// operation. Per-item read state only ever moves `Unread -> Read`;
/// opening a notification never changes it (deliberate product decision
/// carried over from the original pages).
#[derive(Debug)]
pub struct NotificationFeed {
    /// Backend notification API.
    api: Arc<dyn NotificationApi>,
    /// Typed per-user local store.
    local: LocalNotificationStore,
    /// Role selecting the endpoint family.
    role: Role,
    /// Current state. Sections are short; no await happens under the lock.
    state: Mutex<FeedState>,
    /// Monotonic counter issuing one sequence token per load.
    load_seq: AtomicU64,
    /// Guard against double-submitting the bulk-read call.
    mark_in_flight: AtomicBool,
}

impl NotificationFeed {
    /// Create a feed over the given API and local store.
    pub fn new(api: Arc<dyn NotificationApi>, local: LocalNotificationStore, role: Role) -> Self {
        Self {
            api,
            local,
            role,
            state: Mutex::new(FeedState::default()),
            load_seq: AtomicU64::new(0),
            mark_in_flight: AtomicBool::new(false),
        }
    }

    /// Load and reconcile the feed for a user.
    ///
    /// A fetch failure degrades to the local-only (possibly empty) list;
    /// this method never returns an error for it. When loads overlap, a
    /// settled response is applied only if no newer-issued load has been
    /// applied already, and the caller receives whichever snapshot won.
    pub async fn load(&self, user_id: UserId) -> FeedSnapshot {
        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let server = match self.api.fetch(self.role).await {
            Ok(page) => page.notifications,
            Err(e) => {
                error!(%user_id, "Failed to fetch notifications, serving local data only: {e}");
                Vec::new()
            }
        };
        let local = self.local.load(user_id).await;

        let notifications = merge::merge(&local, &server);
        let unread_count = merge::unread_count(&notifications);
        let snapshot = FeedSnapshot {
            notifications,
            unread_count,
        };

        let mut state = self.lock_state();
        if seq > state.applied_seq {
            state.applied_seq = seq;
            state.snapshot = snapshot.clone();
            snapshot
        } else {
            debug!(seq, applied = state.applied_seq, "Discarding stale notification load");
            state.snapshot.clone()
        }
    }

    /// Mark every notification as read, server first.
    ///
    /// Returns `Ok(true)` when the bulk call was submitted and applied,
    /// `Ok(false)` when skipped because another call is still in flight.
    /// Local and in-memory state advance only after the server confirms,
    /// so a failure leaves the badge consistent with the server's read
    /// state; the error is returned rather than swallowed.
    pub async fn mark_all_read(&self, user_id: UserId) -> AppResult<bool> {
        if self
            .mark_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!(%user_id, "Mark-all-read already in flight, skipping");
            return Ok(false);
        }

        let result = self.mark_all_read_inner(user_id).await;
        self.mark_in_flight.store(false, Ordering::SeqCst);
        result.map(|()| true)
    }

    async fn mark_all_read_inner(&self, user_id: UserId) -> AppResult<()> {
        self.api.mark_all_read(self.role).await?;
        self.local.mark_all_read(user_id).await?;

        let mut state = self.lock_state();
        for notification in &mut state.snapshot.notifications {
            notification.read = true;
        }
        state.snapshot.unread_count = 0;
        Ok(())
    }

    /// The currently applied snapshot.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.lock_state().snapshot.clone()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
