//! The merged feed view model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::NotificationKind;
use super::model::{LocalNotification, ServerNotification};

/// Prefix applied to server notification ids in the merged id space.
pub const SERVER_ID_PREFIX: &str = "db-";

/// A notification normalized for display, regardless of source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedNotification {
    /// Merged-space identifier: `db-<id>` for server items, the stored
    /// `local-` id for local items.
    pub id: String,
    /// Kind tag used to pick a display icon.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
    /// Creation time formatted for display; empty when unknown.
    pub date: String,
    /// Sort key in epoch milliseconds; `0` when the source carried no
    /// usable timestamp.
    pub timestamp: i64,
    /// Whether the user has read this notification.
    pub read: bool,
    /// Optional in-app navigation target.
    pub link: Option<String>,
}

impl FeedNotification {
    /// Build the view model for a server notification.
    pub fn from_server(n: &ServerNotification) -> Self {
        Self {
            id: format!("{SERVER_ID_PREFIX}{}", n.id),
            kind: n.kind.clone(),
            message: n.message.clone(),
            date: format_datetime(n.createdat),
            timestamp: n.createdat.map(|t| t.timestamp_millis()).unwrap_or(0),
            read: n.isread,
            link: n.link.clone(),
        }
    }

    /// Build the view model for a legacy local notification.
    pub fn from_local(n: &LocalNotification) -> Self {
        Self {
            id: n.id.clone(),
            kind: n
                .kind
                .clone()
                .unwrap_or_else(|| NotificationKind::Other(String::new())),
            message: n.message.clone().unwrap_or_default(),
            date: format_millis(n.timestamp),
            timestamp: n.timestamp.max(0),
            read: n.read,
            link: n.link.clone(),
        }
    }
}

/// Format a datetime for display: `Mar 5, 2025, 3:04 PM`.
///
/// Returns an empty string when the timestamp is unknown.
pub fn format_datetime(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.format("%b %-d, %Y, %-I:%M %p").to_string(),
        None => String::new(),
    }
}

/// Format an epoch-milliseconds timestamp for display.
pub fn format_millis(ms: i64) -> String {
    if ms <= 0 {
        return String::new();
    }
    format_datetime(DateTime::<Utc>::from_timestamp_millis(ms))
}
