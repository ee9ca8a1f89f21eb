//! Notification domain entities.

pub mod feed;
pub mod kind;
pub mod model;

pub use feed::FeedNotification;
pub use kind::NotificationKind;
pub use model::{LocalNotification, ServerNotification};
