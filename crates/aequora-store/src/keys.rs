//! Store key builders for all Aequora local-store entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the client uses.

use aequora_core::types::UserId;

/// Shared notification key that predates per-user namespacing.
///
/// Early builds stored every resident's notifications under this one key,
/// which leaked entries between users on a shared browser. The store
/// removes it on every load.
pub const LEGACY_SHARED_KEY: &str = "notifications:resident";

/// Store key for the local notification list of a user.
pub fn notifications_for_user(user_id: UserId) -> String {
    format!("notifications:user:{user_id}")
}
