//! Notification source models: server wire shape and legacy local records.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use aequora_core::types::NotificationId;

use super::kind::NotificationKind;

/// Prefix of client-generated local notification ids.
///
/// Keeps local ids out of the `db-` id space used for server
/// notifications in the merged feed.
pub const LOCAL_ID_PREFIX: &str = "local-";

/// A notification as returned by the backend.
///
/// The wire format is lenient where the backend schema is: `isread` is a
/// nullable integer column surfaced as bool, int, or null, and
/// `createdat` may arrive as RFC 3339 or as a naive datetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerNotification {
    /// Server-assigned stable identifier.
    #[serde(rename = "notificationid")]
    pub id: NotificationId,
    /// Notification kind tag.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Human-readable message text.
    pub message: String,
    /// Optional in-app navigation target.
    #[serde(default)]
    pub link: Option<String>,
    /// Whether the user has read this notification (server-authoritative).
    #[serde(default, deserialize_with = "deserialize_read_flag")]
    pub isread: bool,
    /// When the notification was created.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub createdat: Option<DateTime<Utc>>,
}

/// A legacy client-origin notification persisted in the local store.
///
/// These records predate server-side notification support. The store
/// contract only requires `id`, `read`, and `timestamp`; display fields
/// are carried when the feature that created the record wrote them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalNotification {
    /// Client-generated identifier, prefixed with [`LOCAL_ID_PREFIX`].
    pub id: String,
    /// Whether the user has read this notification.
    #[serde(default)]
    pub read: bool,
    /// Creation time in epoch milliseconds.
    #[serde(default)]
    pub timestamp: i64,
    /// Message text, if the creating feature recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Kind tag, if the creating feature recorded one.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationKind>,
    /// Navigation target, if the creating feature recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl LocalNotification {
    /// Create a new unread local notification stamped with the current time.
    pub fn new(kind: NotificationKind, message: impl Into<String>, link: Option<String>) -> Self {
        Self {
            id: format!("{LOCAL_ID_PREFIX}{}", Uuid::new_v4()),
            read: false,
            timestamp: Utc::now().timestamp_millis(),
            message: Some(message.into()),
            kind: Some(kind),
            link,
        }
    }
}

/// Accept `true`/`false`, any integer (zero is false), or null.
fn deserialize_read_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(i)) => i != 0,
        None => false,
    })
}

/// Accept RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` timestamps.
///
/// Unparsable values degrade to `None` so a malformed row cannot take the
/// whole feed down; such items sort with key `0`.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Parse an ISO-ish timestamp string into a UTC datetime.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    None
}
