//! # aequora-store
//!
//! Local key-value store providers (in-memory and file-backed) plus the
//! typed per-user notification store built on top of them.
//!
//! The store replaces the browser localStorage the original client used:
//! an injected [`LocalStore`](aequora_core::traits::LocalStore)
//! implementation, namespaced by user id, with an explicit per-user size
//! cap instead of unbounded growth.

pub mod keys;
pub mod notifications;
pub mod provider;

#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "memory")]
pub mod memory;

pub use notifications::LocalNotificationStore;
pub use provider::StoreManager;
