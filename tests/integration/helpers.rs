//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use aequora::client::{NotificationApi, NotificationPage};
use aequora::core::AppError;
use aequora::core::config::store::StoreConfig;
use aequora::core::result::AppResult;
use aequora::core::types::{NotificationId, Role, UserId};
use aequora::entity::{LocalNotification, NotificationKind, ServerNotification};
use aequora::feed::NotificationFeed;
use aequora::store::memory::MemoryStore;
use aequora::store::{LocalNotificationStore, StoreManager};

/// In-process backend double.
///
/// Holds one notification page and behaves like the real backend: a
/// successful mark-all-read flips every held notification to read, so a
/// subsequent fetch returns the post-mark state.
#[derive(Debug, Default)]
pub struct MockBackend {
    /// The page served to fetch calls.
    page: Mutex<NotificationPage>,
    /// When set, fetch calls fail.
    fail_fetch: AtomicBool,
    /// When set, mark-all-read calls fail.
    fail_mark: AtomicBool,
    /// Number of mark-all-read calls received.
    mark_calls: AtomicU64,
}

impl MockBackend {
    pub fn with_notifications(notifications: Vec<ServerNotification>) -> Arc<Self> {
        let unread_count = notifications.iter().filter(|n| !n.isread).count() as i64;
        Arc::new(Self {
            page: Mutex::new(NotificationPage {
                unread_count,
                notifications,
            }),
            ..Self::default()
        })
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_mark(&self, fail: bool) {
        self.fail_mark.store(fail, Ordering::SeqCst);
    }

    pub fn mark_call_count(&self) -> u64 {
        self.mark_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationApi for MockBackend {
    async fn fetch(&self, _role: Role) -> AppResult<NotificationPage> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(AppError::api("mock backend unreachable"));
        }
        Ok(self.page.lock().unwrap().clone())
    }

    async fn mark_all_read(&self, _role: Role) -> AppResult<()> {
        self.mark_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mark.load(Ordering::SeqCst) {
            return Err(AppError::api("mock backend unreachable"));
        }
        let mut page = self.page.lock().unwrap();
        for n in &mut page.notifications {
            n.isread = true;
        }
        page.unread_count = 0;
        Ok(())
    }
}

/// A feed wired to a mock backend and an in-memory store.
pub struct TestFeed {
    pub feed: NotificationFeed,
    pub backend: Arc<MockBackend>,
    pub local: LocalNotificationStore,
}

impl TestFeed {
    pub fn new(notifications: Vec<ServerNotification>) -> Self {
        let backend = MockBackend::with_notifications(notifications);
        let config = StoreConfig {
            provider: "memory".to_string(),
            directory: String::new(),
            max_entries_per_user: 50,
        };
        let manager = StoreManager::from_provider(Arc::new(MemoryStore::new()));
        let local = LocalNotificationStore::new(Arc::new(manager), &config);
        let feed = NotificationFeed::new(backend.clone(), local.clone(), Role::Resident);
        Self {
            feed,
            backend,
            local,
        }
    }
}

/// Build a server notification with a second-granularity timestamp.
pub fn server_notification(id: i64, secs: u32, read: bool) -> ServerNotification {
    ServerNotification {
        id: NotificationId::new(id),
        kind: NotificationKind::Issue,
        message: format!("Issue update {id}"),
        link: Some(format!("/resident/issues/{id}")),
        isread: read,
        createdat: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, secs).unwrap()),
    }
}

/// Build an unread local notification with the given millisecond timestamp.
pub fn local_notification(timestamp: i64) -> LocalNotification {
    let mut n = LocalNotification::new(NotificationKind::Booking, "Booking confirmed", None);
    n.timestamp = timestamp;
    n
}

/// User id used by most tests.
pub fn user() -> UserId {
    UserId::new(1)
}
