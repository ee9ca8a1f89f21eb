//! # aequora-entity
//!
//! Domain entities for the Aequora notification feed: the server wire
//! model, the legacy client-origin record, and the merged view model.

pub mod notification;

pub use notification::feed::FeedNotification;
pub use notification::kind::NotificationKind;
pub use notification::model::{LocalNotification, ServerNotification};
