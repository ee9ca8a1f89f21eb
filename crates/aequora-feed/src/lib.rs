//! # aequora-feed
//!
//! The notification reconciler: combines the server notification page
//! with the user's legacy local records into one time-sorted feed with a
//! recomputed unread count, and provides the guarded, idempotent
//! mark-all-read operation.

pub mod merge;
pub mod reconciler;

pub use reconciler::{FeedSnapshot, NotificationFeed};
