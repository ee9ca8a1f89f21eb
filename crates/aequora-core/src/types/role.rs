//! User role enumeration.

use serde::{Deserialize, Serialize};

/// The role under which a user consumes the notification feed.
///
/// The backend exposes one notification endpoint family per role; the
/// role only selects the URL path, never the reconciliation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A community resident.
    Resident,
    /// A municipal authority.
    Authority,
}

impl Role {
    /// Return the role as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Authority => "authority",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
