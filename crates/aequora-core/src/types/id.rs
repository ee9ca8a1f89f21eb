//! Newtype wrappers around `i64` for domain entity identifiers.
//!
//! The Aequora backend assigns numeric auto-increment ids. Using distinct
//! types prevents accidentally passing a `UserId` where a
//! `NotificationId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw numeric value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the inner numeric value.
            pub fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of a registered user.
    UserId
}

define_id! {
    /// Identifier of a server-side notification.
    NotificationId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse_roundtrip() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<UserId>().unwrap(), id);
    }

    #[test]
    fn test_distinct_types() {
        let user = UserId::new(7);
        let notif = NotificationId::new(7);
        assert_eq!(user.into_inner(), notif.into_inner());
    }
}
