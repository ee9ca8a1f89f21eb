//! End-to-end reconciliation scenarios against the mock backend.

use aequora::core::types::UserId;

use crate::helpers::{TestFeed, local_notification, server_notification, user};

#[tokio::test]
async fn merged_feed_is_sorted_and_counted() {
    let fx = TestFeed::new(vec![
        server_notification(1, 10, false),
        server_notification(2, 40, false),
        server_notification(3, 20, true),
    ]);
    let base = server_notification(1, 30, false)
        .createdat
        .unwrap()
        .timestamp_millis();
    fx.local
        .push(user(), local_notification(base))
        .await
        .unwrap();

    let snapshot = fx.feed.load(user()).await;

    assert_eq!(snapshot.notifications.len(), 4);
    assert_eq!(snapshot.unread_count, 3);
    let ids: Vec<&str> = snapshot.notifications.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids[0], "db-2");
    assert_eq!(ids[3], "db-1");
    assert!(snapshot
        .notifications
        .windows(2)
        .all(|w| w[0].timestamp >= w[1].timestamp));
}

#[tokio::test]
async fn missing_local_key_means_server_only_feed() {
    let fx = TestFeed::new(vec![server_notification(5, 1, false)]);

    let snapshot = fx.feed.load(user()).await;

    assert_eq!(snapshot.notifications.len(), 1);
    assert_eq!(snapshot.notifications[0].id, "db-5");
    assert_eq!(snapshot.unread_count, 1);
}

#[tokio::test]
async fn fetch_failure_still_resolves_with_local_data() {
    let fx = TestFeed::new(vec![server_notification(1, 1, false)]);
    fx.local.push(user(), local_notification(99)).await.unwrap();
    fx.backend.set_fail_fetch(true);

    let snapshot = fx.feed.load(user()).await;

    assert_eq!(snapshot.notifications.len(), 1);
    assert!(snapshot.notifications[0].id.starts_with("local-"));
    assert_eq!(snapshot.unread_count, 1);
}

#[tokio::test]
async fn mark_all_read_then_reload_yields_zero_unread() {
    let fx = TestFeed::new(vec![
        server_notification(1, 1, false),
        server_notification(2, 2, false),
    ]);
    fx.local.push(user(), local_notification(50)).await.unwrap();

    let before = fx.feed.load(user()).await;
    assert_eq!(before.unread_count, 3);
    assert_eq!(before.badge(), Some(3));

    assert!(fx.feed.mark_all_read(user()).await.unwrap());

    // The in-memory snapshot flips immediately.
    let snapshot = fx.feed.snapshot();
    assert_eq!(snapshot.unread_count, 0);
    assert_eq!(snapshot.badge(), None);

    // A reload agrees: the backend and the local store were both updated.
    let after = fx.feed.load(user()).await;
    assert_eq!(after.unread_count, 0);
    assert!(after.notifications.iter().all(|n| n.read));
}

#[tokio::test]
async fn mark_all_read_twice_reaches_the_same_terminal_state() {
    let fx = TestFeed::new(vec![server_notification(1, 1, false)]);
    fx.feed.load(user()).await;

    assert!(fx.feed.mark_all_read(user()).await.unwrap());
    assert!(fx.feed.mark_all_read(user()).await.unwrap());

    assert_eq!(fx.backend.mark_call_count(), 2);
    assert_eq!(fx.feed.snapshot().unread_count, 0);
    assert_eq!(fx.feed.load(user()).await.unread_count, 0);
}

#[tokio::test]
async fn backend_failure_on_mark_keeps_local_state_unread() {
    let fx = TestFeed::new(vec![server_notification(1, 1, false)]);
    fx.local.push(user(), local_notification(9)).await.unwrap();
    fx.feed.load(user()).await;
    fx.backend.set_fail_mark(true);

    assert!(fx.feed.mark_all_read(user()).await.is_err());

    // Neither the snapshot nor the stored list advanced to read.
    assert_eq!(fx.feed.snapshot().unread_count, 2);
    let stored = fx.local.load(user()).await;
    assert!(stored.iter().any(|n| !n.read));

    // Once the backend recovers the same call succeeds.
    fx.backend.set_fail_mark(false);
    assert!(fx.feed.mark_all_read(user()).await.unwrap());
    assert_eq!(fx.feed.load(user()).await.unread_count, 0);
}

#[tokio::test]
async fn local_notifications_are_isolated_per_user() {
    let fx = TestFeed::new(Vec::new());
    fx.local.push(user(), local_notification(1)).await.unwrap();

    let user_a = fx.feed.load(user()).await;
    assert_eq!(user_a.notifications.len(), 1);

    let user_b = fx.feed.load(UserId::new(2)).await;
    assert!(user_b.notifications.is_empty());
    assert_eq!(user_b.unread_count, 0);
}
