//! Shared type definitions.

pub mod id;
pub mod role;

pub use id::{NotificationId, UserId};
pub use role::Role;
