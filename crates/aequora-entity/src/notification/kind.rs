//! Notification kind enumeration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of a notification, used by consumers to pick a display icon.
///
/// The tag set is open: the backend may introduce new kinds at any time,
/// so unknown strings are preserved in [`NotificationKind::Other`] rather
/// than rejected. The feed itself never branches on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// An emergency SOS alert was raised near the user.
    Sos,
    /// The user's own SOS alert was submitted.
    SosSent,
    /// A reported issue was updated.
    Issue,
    /// A reported issue was resolved.
    IssueResolved,
    /// A community event was updated.
    Event,
    /// A new community event was published.
    NewEvent,
    /// A community vote opened or closed.
    Vote,
    /// A service booking changed state.
    Booking,
    /// The user's profile was changed.
    Profile,
    /// A kind this client does not know about.
    Other(String),
}

impl NotificationKind {
    /// Return the kind as its wire string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sos => "sos",
            Self::SosSent => "sos-sent",
            Self::Issue => "issue",
            Self::IssueResolved => "issue-resolved",
            Self::Event => "event",
            Self::NewEvent => "new-event",
            Self::Vote => "vote",
            Self::Booking => "booking",
            Self::Profile => "profile",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(s: &str) -> Self {
        match s {
            "sos" => Self::Sos,
            "sos-sent" => Self::SosSent,
            "issue" => Self::Issue,
            "issue-resolved" => Self::IssueResolved,
            "event" => Self::Event,
            "new-event" => Self::NewEvent,
            "vote" => Self::Vote,
            "booking" => Self::Booking,
            "profile" => Self::Profile,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for NotificationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NotificationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kind_roundtrip() {
        let kind: NotificationKind = serde_json::from_str("\"issue-resolved\"").unwrap();
        assert_eq!(kind, NotificationKind::IssueResolved);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"issue-resolved\"");
    }

    #[test]
    fn test_unknown_kind_preserved() {
        let kind: NotificationKind = serde_json::from_str("\"waste-pickup\"").unwrap();
        assert_eq!(kind, NotificationKind::Other("waste-pickup".to_string()));
        assert_eq!(kind.as_str(), "waste-pickup");
    }
}
