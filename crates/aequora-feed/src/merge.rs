//! Pure merge and counting functions.

use aequora_entity::{FeedNotification, LocalNotification, ServerNotification};

/// Merge local and server notifications into one display list.
///
/// Local items come first in the concatenation; the stable sort then
/// orders by timestamp descending, so equal-timestamp items keep local
/// before server. No secondary key is defined for ties.
pub fn merge(local: &[LocalNotification], server: &[ServerNotification]) -> Vec<FeedNotification> {
    let mut merged: Vec<FeedNotification> = local
        .iter()
        .map(FeedNotification::from_local)
        .chain(server.iter().map(FeedNotification::from_server))
        .collect();

    merged.sort_by_key(|n| std::cmp::Reverse(n.timestamp));
    merged
}

/// Count the unread entries of a merged list.
///
/// Always derived from the list itself, never from a cached value or the
/// server-reported count.
pub fn unread_count(items: &[FeedNotification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}
